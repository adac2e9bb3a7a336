mod config;
mod error;
mod i18n;
mod locale;
mod logging;
mod page;
mod reward;
mod sequence;
mod surface;
mod switcher;
mod translations;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

use config::Config;
use i18n::I18n;
use locale::Locale;

#[derive(Parser)]
#[command(name = "uc")]
#[command(about = "A bilingual \"under construction\" page for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive page (default)
    Show {
        /// Start in this language (en | pt) instead of the detected one
        #[arg(long)]
        lang: Option<String>,
    },
    /// Print the page once and exit
    Print {
        /// Print in this language (en | pt) instead of the detected one
        #[arg(long)]
        lang: Option<String>,
        /// Emit the page text as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which language would be picked from the environment
    Detect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_error) = Config::new();

    let interactive = matches!(cli.command, None | Some(Commands::Show { .. })) && !config.tui_simple();
    let _log_guard = logging::init_logging(&config, interactive)?;
    install_panic_hook(interactive, config.use_alt_screen());
    if let Some(e) = config_error {
        let msg = format!("{:#}", e);
        tracing::warn!(error = %msg, "config unavailable, using defaults");
    }

    let result = run(cli.command, &config, interactive);
    if let Err(e) = &result {
        let msg = format!("{:#}", e);
        tracing::error!(error = %msg, "uc failed");
    }
    result
}

fn run(command: Option<Commands>, config: &Config, interactive: bool) -> Result<()> {
    match command.unwrap_or(Commands::Show { lang: None }) {
        Commands::Show { lang } => {
            let locale = resolve_locale(config, lang.as_deref())?;
            if interactive {
                tui::run(config, locale)
            } else {
                page::print_page(config, locale, false)
            }
        }
        Commands::Print { lang, json } => {
            let locale = resolve_locale(config, lang.as_deref())?;
            page::print_page(config, locale, json)
        }
        Commands::Detect => {
            let report = detect_report(config, |var| std::env::var(var).ok());
            println!("{}", report.detected.tag().green().bold());
            for line in &report.notes {
                println!("{}", line.dimmed());
            }
            Ok(())
        }
    }
}

/// What `uc detect` prints: the environment's locale, its source value,
/// and the configured language when it overrides detection.
struct DetectReport {
    detected: Locale,
    notes: Vec<String>,
}

fn detect_report(config: &Config, lookup: impl Fn(&str) -> Option<String>) -> DetectReport {
    let preference = locale::preference_with(&lookup);
    let detected = preference
        .as_deref()
        .map(locale::detect_preferred_locale)
        .unwrap_or(Locale::DEFAULT);
    let i18n = I18n::new(config.get_effective_locale());

    let shown = preference.unwrap_or_else(|| i18n.t("no_preference"));
    let mut notes = vec![i18n.t_format("detected_locale", &[detected.tag(), &shown])];
    if let Some(configured) = config.language_override() {
        notes.push(i18n.t_format("configured_locale", &[configured.tag()]));
    }
    DetectReport { detected, notes }
}

/// An explicit `--lang` must name a supported locale; otherwise the
/// configured or detected one is used.
fn resolve_locale(config: &Config, lang: Option<&str>) -> Result<Locale> {
    match lang {
        Some(tag) => Ok(tag.parse()?),
        None => Ok(config.get_effective_locale()),
    }
}

/// Log panics and leave the terminal usable.
fn install_panic_hook(interactive: bool, alt_screen: bool) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if interactive {
            tui::restore_terminal(alt_screen);
        }
        tracing::error!(panic = %info, "unhandled panic");
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang_fr(name: &str) -> Option<String> {
        (name == "LANG").then(|| "fr_FR.UTF-8".to_string())
    }

    #[test]
    fn detect_reports_environment_not_config() -> anyhow::Result<()> {
        let config = Config::from_toml_str("[display]\nlanguage = \"pt\"\n")?;
        let report = detect_report(&config, lang_fr);
        assert_eq!(report.detected, Locale::En);
        assert_eq!(report.notes.len(), 2);
        assert!(report.notes[0].contains("en"));
        assert!(report.notes[0].contains("fr_FR.UTF-8"));
        assert!(report.notes[1].contains("display.language"));
        assert!(report.notes[1].contains("pt"));
        Ok(())
    }

    #[test]
    fn detect_with_auto_config_has_no_override_line() {
        let report = detect_report(&Config::default(), |name: &str| {
            (name == "LANGUAGE").then(|| "pt_BR".to_string())
        });
        assert_eq!(report.detected, Locale::Pt);
        assert_eq!(report.notes.len(), 1);
    }

    #[test]
    fn unknown_lang_flag_is_rejected() {
        let config = Config::default();
        assert!(resolve_locale(&config, Some("fr")).is_err());
        assert_eq!(resolve_locale(&config, Some("pt")).unwrap(), Locale::Pt);
    }
}
