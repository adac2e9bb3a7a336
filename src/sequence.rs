use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A single key press as seen by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Other,
}

impl KeyInput {
    /// Convert a terminal key event. Releases and repeats yield `None` so they
    /// are not counted as presses.
    pub fn from_key_event(event: &KeyEvent) -> Option<KeyInput> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        Some(match event.code {
            KeyCode::Up => KeyInput::Up,
            KeyCode::Down => KeyInput::Down,
            KeyCode::Left => KeyInput::Left,
            KeyCode::Right => KeyInput::Right,
            KeyCode::Char(c) => KeyInput::Char(c),
            _ => KeyInput::Other,
        })
    }
}

pub const KONAMI: [KeyInput; 10] = [
    KeyInput::Up,
    KeyInput::Up,
    KeyInput::Down,
    KeyInput::Down,
    KeyInput::Left,
    KeyInput::Right,
    KeyInput::Left,
    KeyInput::Right,
    KeyInput::Char('b'),
    KeyInput::Char('a'),
];

/// Matches a fixed key sequence against incoming presses.
///
/// A mismatch resets the cursor to zero without re-checking the offending
/// key against the first target symbol, so a retried first key only counts
/// from the next press.
#[derive(Debug, Clone)]
pub struct SequenceDetector {
    target: Vec<KeyInput>,
    cursor: usize,
}

impl SequenceDetector {
    pub fn new(target: impl Into<Vec<KeyInput>>) -> Self {
        Self {
            target: target.into(),
            cursor: 0,
        }
    }

    pub fn konami() -> Self {
        Self::new(KONAMI)
    }

    /// Feed one press. Returns `true` exactly when the sequence completes.
    pub fn feed(&mut self, key: KeyInput) -> bool {
        if self.target.get(self.cursor) == Some(&key) {
            self.cursor += 1;
            if self.cursor == self.target.len() {
                self.cursor = 0;
                return true;
            }
        } else {
            self.cursor = 0;
        }
        false
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn feed_all(d: &mut SequenceDetector, keys: &[KeyInput]) -> usize {
        keys.iter().filter(|k| d.feed(**k)).count()
    }

    #[test]
    fn exact_sequence_fires_once() {
        let mut d = SequenceDetector::konami();
        assert_eq!(feed_all(&mut d, &KONAMI), 1);
        assert_eq!(d.cursor(), 0);
    }

    #[test]
    fn sequence_twice_fires_twice() {
        let mut d = SequenceDetector::konami();
        let twice: Vec<KeyInput> = KONAMI.iter().chain(KONAMI.iter()).copied().collect();
        assert_eq!(feed_all(&mut d, &twice), 2);
    }

    #[test]
    fn any_substitution_never_fires() {
        for pos in 0..KONAMI.len() {
            let mut keys = KONAMI;
            keys[pos] = KeyInput::Char('x');
            let mut d = SequenceDetector::konami();
            assert_eq!(feed_all(&mut d, &keys), 0, "substitution at {}", pos);
            assert!(d.cursor() <= 1, "cursor {} after substitution at {}", d.cursor(), pos);
        }
    }

    #[test]
    fn substitution_in_final_position_leaves_cursor_at_zero() {
        let mut keys = KONAMI;
        keys[9] = KeyInput::Other;
        let mut d = SequenceDetector::konami();
        feed_all(&mut d, &keys);
        assert_eq!(d.cursor(), 0);
    }

    #[test]
    fn mismatch_does_not_recheck_first_symbol() {
        let mut d = SequenceDetector::konami();
        d.feed(KeyInput::Up);
        d.feed(KeyInput::Up);
        // Third Up is a mismatch (expected Down): full reset, not cursor 1.
        assert!(!d.feed(KeyInput::Up));
        assert_eq!(d.cursor(), 0);
        d.feed(KeyInput::Up);
        assert_eq!(d.cursor(), 1);
    }

    #[test]
    fn letters_are_case_sensitive() {
        let mut keys = KONAMI;
        keys[8] = KeyInput::Char('B');
        let mut d = SequenceDetector::konami();
        assert_eq!(feed_all(&mut d, &keys), 0);
    }

    #[test]
    fn key_events_map_to_inputs() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(KeyInput::from_key_event(&up), Some(KeyInput::Up));
        let b = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE);
        assert_eq!(KeyInput::from_key_event(&b), Some(KeyInput::Char('b')));
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(KeyInput::from_key_event(&enter), Some(KeyInput::Other));
        let mut release = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(KeyInput::from_key_event(&release), None);
    }
}
