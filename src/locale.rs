use crate::error::PageError;
use std::fmt;
use std::str::FromStr;

/// Display languages the page ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Pt,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Pt];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }

    /// Label shown on the language toggle.
    pub fn indicator(self) -> String {
        self.tag().to_uppercase()
    }

    /// Value for the root language attribute.
    pub fn root_lang(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt-BR",
        }
    }

    /// The other member of the two-locale set.
    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Pt,
            Locale::Pt => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Locale::ALL
            .into_iter()
            .find(|l| l.tag() == s)
            .ok_or(PageError::UnknownLocale(s))
    }
}

/// Map a locale preference (`xx`, `xx-YY`, `xx_YY.UTF-8`) to a supported
/// locale by prefix, falling back to the default.
pub fn detect_preferred_locale(preference: &str) -> Locale {
    let pref = preference.trim().to_lowercase();
    Locale::ALL
        .into_iter()
        .find(|l| pref.starts_with(l.tag()))
        .unwrap_or(Locale::DEFAULT)
}

const LOCALE_VARS: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Read the locale preference from the environment, in the order
/// `LANGUAGE`, `LC_ALL`, `LC_MESSAGES`, `LANG`.
pub fn detect_from_env() -> Locale {
    detect_with(|var| std::env::var(var).ok())
}

pub fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    preference_with(lookup)
        .map(|p| detect_preferred_locale(&p))
        .unwrap_or(Locale::DEFAULT)
}

/// First non-empty locale variable, resolved through `lookup`.
pub fn preference_with(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|v| !v.trim().is_empty())
}
