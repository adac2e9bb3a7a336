use crate::locale::{self, Locale};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub easter_egg: EasterEggConfig,
    pub logging: LoggingConfig,
    pub page: PageConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    // "auto" reads the locale from the environment
    pub language: String,
    // TUI mode: "interactive" or "simple"
    pub tui_mode: String,
    pub alt_screen: bool,
    // Event poll timeout, also the redraw interval
    pub tick_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            tui_mode: "interactive".to_string(),
            alt_screen: true,
            tick_ms: 100,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EasterEggConfig {
    pub enabled: bool,
    pub notice_ms: u64,
}

impl Default for EasterEggConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            notice_ms: 3000,
        }
    }
}

impl EasterEggConfig {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PageConfig {
    pub brand: String,
    pub show_year: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            brand: "Saygonsoft".to_string(),
            show_year: true,
        }
    }
}

impl Config {
    /// Load the config file, writing the defaults on first run.
    ///
    /// Never fails: an unreadable file or a failed first-run save yields the
    /// defaults together with the error, to be logged once logging is up.
    pub fn new() -> (Self, Option<anyhow::Error>) {
        Self::load_or_init(&Self::get_config_path())
    }

    pub fn load_or_init(config_path: &Path) -> (Self, Option<anyhow::Error>) {
        if config_path.exists() {
            match Self::load_from(config_path)
                .with_context(|| format!("failed to load {}", config_path.display()))
            {
                Ok(config) => (config, None),
                Err(e) => (Config::default(), Some(e)),
            }
        } else {
            let config = Config::default();
            let err = config.save_to(config_path).err();
            (config, err)
        }
    }

    pub fn load_from(path: &Path) -> crate::error::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> crate::error::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir)
                .with_context(|| format!("failed to create {}", config_dir.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        Ok(())
    }

    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".uc")
    }

    fn get_config_path() -> PathBuf {
        match std::env::var("UC_CONFIG") {
            Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => Self::home_dir().join("config.toml"),
        }
    }

    /// The locale pinned by `display.language`, or `None` for "auto".
    pub fn language_override(&self) -> Option<Locale> {
        if self.display.language.eq_ignore_ascii_case("auto") {
            None
        } else {
            Some(locale::detect_preferred_locale(&self.display.language))
        }
    }

    /// Configured language, or the environment's preference when "auto".
    /// An unsupported configured value falls back like an unsupported
    /// environment preference.
    pub fn get_effective_locale(&self) -> Locale {
        self.language_override().unwrap_or_else(locale::detect_from_env)
    }

    /// `UC_TUI` overrides `display.tui_mode`.
    pub fn tui_simple(&self) -> bool {
        self.tui_simple_with(|var| std::env::var(var).ok())
    }

    pub fn tui_simple_with(&self, lookup: impl Fn(&str) -> Option<String>) -> bool {
        lookup("UC_TUI")
            .map(|v| { let v = v.to_lowercase(); v == "0" || v == "false" || v == "simple" })
            .unwrap_or_else(|| self.display.tui_mode.to_lowercase() == "simple")
    }

    /// `UC_ALT_SCREEN` overrides `display.alt_screen`.
    pub fn use_alt_screen(&self) -> bool {
        self.use_alt_screen_with(|var| std::env::var(var).ok())
    }

    pub fn use_alt_screen_with(&self, lookup: impl Fn(&str) -> Option<String>) -> bool {
        lookup("UC_ALT_SCREEN")
            .map(|v| { let v = v.to_lowercase(); !(v == "0" || v == "false") })
            .unwrap_or(self.display.alt_screen)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.display.tick_ms.max(10))
    }

    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| Self::home_dir().join("uc.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;

    #[test]
    fn partial_file_keeps_defaults() -> anyhow::Result<()> {
        let config = Config::from_toml_str("[easter_egg]\nnotice_ms = 1500\n")?;
        assert_eq!(config.easter_egg.notice_duration(), Duration::from_millis(1500));
        assert!(config.easter_egg.enabled);
        assert_eq!(config.display.language, "auto");
        assert_eq!(config.page.brand, "Saygonsoft");
        assert_eq!(config.logging.level, "info");
        Ok(())
    }

    #[test]
    fn explicit_language_wins_over_environment() -> anyhow::Result<()> {
        let config = Config::from_toml_str("[display]\nlanguage = \"pt\"\n")?;
        assert_eq!(config.get_effective_locale(), Locale::Pt);
        let config = Config::from_toml_str("[display]\nlanguage = \"de\"\n")?;
        assert_eq!(config.get_effective_locale(), Locale::En);
        Ok(())
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        assert!(matches!(
            Config::from_toml_str("[display\nlanguage ="),
            Err(PageError::Config(_))
        ));
    }

    #[test]
    fn save_then_load_from_disk() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.page.brand = "Acme".to_string();
        config.display.tick_ms = 50;
        config.save_to(&path)?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.page.brand, "Acme");
        assert_eq!(loaded.tick(), Duration::from_millis(50));
        Ok(())
    }

    #[test]
    fn first_run_writes_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        let (config, err) = Config::load_or_init(&path);
        assert!(err.is_none());
        assert!(path.exists());
        assert_eq!(config.page.brand, "Saygonsoft");

        let (again, err) = Config::load_or_init(&path);
        assert!(err.is_none());
        assert_eq!(again.display.language, "auto");
        Ok(())
    }

    #[test]
    fn unwritable_path_falls_back_to_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        // A regular file where the config directory should be.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "")?;
        let path = blocker.join("config.toml");

        let (config, err) = Config::load_or_init(&path);
        assert!(err.is_some());
        assert_eq!(config.display.language, "auto");
        assert!(config.easter_egg.enabled);
        Ok(())
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "[display\nlanguage = \"pt\"\n")?;

        let (config, err) = Config::load_or_init(&path);
        let err = err.expect("malformed config should report an error");
        assert!(format!("{:#}", err).contains("failed to load"));
        assert_eq!(config.display.language, "auto");
        Ok(())
    }

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| pairs.iter().find(|(k, _)| *k == name).map(|(_, v)| v.to_string())
    }

    #[test]
    fn tui_env_overrides_configured_mode() {
        let config = Config::default();
        assert!(!config.tui_simple_with(env(&[])));
        assert!(config.tui_simple_with(env(&[("UC_TUI", "simple")])));
        assert!(config.tui_simple_with(env(&[("UC_TUI", "0")])));
        assert!(config.tui_simple_with(env(&[("UC_TUI", "FALSE")])));

        let mut simple = Config::default();
        simple.display.tui_mode = "simple".to_string();
        assert!(simple.tui_simple_with(env(&[])));
        assert!(!simple.tui_simple_with(env(&[("UC_TUI", "interactive")])));
    }

    #[test]
    fn alt_screen_env_overrides_config() {
        let config = Config::default();
        assert!(config.use_alt_screen_with(env(&[])));
        assert!(!config.use_alt_screen_with(env(&[("UC_ALT_SCREEN", "0")])));
        assert!(!config.use_alt_screen_with(env(&[("UC_ALT_SCREEN", "false")])));

        let mut off = Config::default();
        off.display.alt_screen = false;
        assert!(!off.use_alt_screen_with(env(&[])));
        assert!(off.use_alt_screen_with(env(&[("UC_ALT_SCREEN", "1")])));
    }

    #[test]
    fn language_override_only_when_not_auto() -> anyhow::Result<()> {
        assert_eq!(Config::default().language_override(), None);
        let config = Config::from_toml_str("[display]\nlanguage = \"pt\"\n")?;
        assert_eq!(config.language_override(), Some(Locale::Pt));
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load_from(&dir.path().join("nope.toml")),
            Err(PageError::Io(_))
        ));
    }
}
