use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const RAINBOW_STYLE_ID: &str = "rainbow-style";
pub const NOTICE_TEXT: &str = "🎉 Easter Egg Activated! 🎉";
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// A looping hue rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    pub period: Duration,
    pub from_hue: f32,
    pub to_hue: f32,
}

impl Keyframes {
    pub fn rainbow() -> Self {
        Self {
            period: Duration::from_secs(2),
            from_hue: 0.0,
            to_hue: 360.0,
        }
    }

    /// Hue at `elapsed` since the animation started.
    pub fn hue_at(&self, elapsed: Duration) -> f32 {
        let period = self.period.as_secs_f32();
        if period <= 0.0 {
            return self.from_hue;
        }
        let t = (elapsed.as_secs_f32() % period) / period;
        self.from_hue + (self.to_hue - self.from_hue) * t
    }
}

/// Named style resources, registered at most once each.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, Keyframes>,
}

impl StyleRegistry {
    /// Returns `false` when `id` is already registered; the existing entry
    /// is kept.
    pub fn register_once(&mut self, id: &str, keyframes: Keyframes) -> bool {
        if self.styles.contains_key(id) {
            return false;
        }
        self.styles.insert(id.to_string(), keyframes);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Keyframes> {
        self.styles.get(id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.styles.len()
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

/// The hidden-sequence reward: rainbow logo plus a transient notice.
#[derive(Debug)]
pub struct Reward {
    styles: StyleRegistry,
    notices: Vec<Notice>,
    notice_duration: Duration,
    logo_animation_started: Option<Instant>,
    activations: u32,
}

impl Reward {
    pub fn new(notice_duration: Duration) -> Self {
        Self {
            styles: StyleRegistry::default(),
            notices: Vec::new(),
            notice_duration,
            logo_animation_started: None,
            activations: 0,
        }
    }

    pub fn activate(&mut self, now: Instant) {
        self.activations += 1;
        self.logo_animation_started = Some(now);
        if self.styles.register_once(RAINBOW_STYLE_ID, Keyframes::rainbow()) {
            debug!(id = RAINBOW_STYLE_ID, "style registered");
        }
        // Each activation schedules its own removal; earlier notices are not
        // cancelled.
        self.notices.push(Notice {
            text: NOTICE_TEXT.to_string(),
            expires_at: now + self.notice_duration,
        });
        info!(activations = self.activations, pending = self.notices.len(), "easter egg activated");
    }

    /// Drop notices whose deadline has passed. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.notices.len();
        self.notices.retain(|n| n.expires_at > now);
        let removed = before - self.notices.len();
        if removed > 0 {
            debug!(removed, remaining = self.notices.len(), "notices expired");
        }
        removed
    }

    /// The most recent notice still on screen.
    pub fn visible_notice(&self, now: Instant) -> Option<&Notice> {
        self.notices.iter().rev().find(|n| n.expires_at > now)
    }

    #[cfg(test)]
    pub fn pending_notices(&self) -> usize {
        self.notices.len()
    }

    /// Current logo hue, or `None` while the logo is not animated.
    pub fn logo_hue(&self, now: Instant) -> Option<f32> {
        let started = self.logo_animation_started?;
        let keyframes = self.styles.get(RAINBOW_STYLE_ID)?;
        Some(keyframes.hue_at(now.saturating_duration_since(started)))
    }

    #[cfg(test)]
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn activations(&self) -> u32 {
        self.activations
    }
}

impl Default for Reward {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_registered_once_across_activations() {
        let mut reward = Reward::default();
        let now = Instant::now();
        reward.activate(now);
        reward.activate(now);
        assert_eq!(reward.styles().len(), 1);
        assert!(reward.styles().get(RAINBOW_STYLE_ID).is_some());
        assert_eq!(reward.activations(), 2);
    }

    #[test]
    fn register_once_keeps_first_entry() {
        let mut registry = StyleRegistry::default();
        assert!(registry.register_once("x", Keyframes::rainbow()));
        let other = Keyframes { period: Duration::from_secs(9), from_hue: 0.0, to_hue: 1.0 };
        assert!(!registry.register_once("x", other));
        assert_eq!(registry.get("x"), Some(&Keyframes::rainbow()));
    }

    #[test]
    fn notice_removed_after_three_seconds() {
        let mut reward = Reward::default();
        let t0 = Instant::now();
        reward.activate(t0);
        assert_eq!(reward.visible_notice(t0).map(|n| n.text.as_str()), Some(NOTICE_TEXT));

        assert_eq!(reward.expire(t0 + Duration::from_millis(2999)), 0);
        assert_eq!(reward.pending_notices(), 1);

        assert_eq!(reward.expire(t0 + Duration::from_millis(3000)), 1);
        assert!(reward.visible_notice(t0 + Duration::from_millis(3000)).is_none());
    }

    #[test]
    fn overlapping_activations_each_keep_their_own_timer() {
        let mut reward = Reward::default();
        let t0 = Instant::now();
        reward.activate(t0);
        reward.activate(t0 + Duration::from_secs(1));
        assert_eq!(reward.pending_notices(), 2);

        assert_eq!(reward.expire(t0 + Duration::from_secs(3)), 1);
        assert!(reward.visible_notice(t0 + Duration::from_secs(3)).is_some());
        assert_eq!(reward.expire(t0 + Duration::from_secs(4)), 1);
        assert_eq!(reward.pending_notices(), 0);
    }

    #[test]
    fn logo_hue_cycles_after_activation() {
        let mut reward = Reward::default();
        let t0 = Instant::now();
        assert!(reward.logo_hue(t0).is_none());
        reward.activate(t0);
        assert_eq!(reward.logo_hue(t0), Some(0.0));
        let half = reward.logo_hue(t0 + Duration::from_secs(1)).unwrap();
        assert!((half - 180.0).abs() < 0.5);
        // The rainbow keeps running after the notice is gone.
        assert!(reward.logo_hue(t0 + Duration::from_secs(10)).is_some());
    }
}
