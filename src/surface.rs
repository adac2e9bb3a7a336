use std::fmt;

/// Named places on the page that receive translated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hook {
    Title,
    Description,
    Description2,
    Cta,
    ProgressLabel,
    /// Positional slot, ordered like `FeatureKey::ORDER`.
    FeatureTitle(usize),
    LanguageIndicator,
    RootLang,
}

impl Hook {
    pub fn all() -> Vec<Hook> {
        let mut hooks = vec![
            Hook::Title,
            Hook::Description,
            Hook::Description2,
            Hook::Cta,
            Hook::ProgressLabel,
        ];
        hooks.extend((0..crate::translations::FeatureKey::ORDER.len()).map(Hook::FeatureTitle));
        hooks.push(Hook::LanguageIndicator);
        hooks.push(Hook::RootLang);
        hooks
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hook::Title => f.write_str("title"),
            Hook::Description => f.write_str("description"),
            Hook::Description2 => f.write_str("description-2"),
            Hook::Cta => f.write_str("cta-text"),
            Hook::ProgressLabel => f.write_str("progress-label"),
            Hook::FeatureTitle(i) => write!(f, "feature-title[{}]", i),
            Hook::LanguageIndicator => f.write_str("current-lang"),
            Hook::RootLang => f.write_str("root-lang"),
        }
    }
}

/// Anything whose displayed text can be replaced.
pub trait TextSurface {
    fn set_text(&mut self, text: &str);
}

impl TextSurface for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// A view exposing its text surfaces by hook. `None` means the view has no
/// such surface.
pub trait SurfaceHost {
    fn surface(&mut self, hook: Hook) -> Option<&mut dyn TextSurface>;
}
