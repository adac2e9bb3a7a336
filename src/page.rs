use crate::config::Config;
use crate::i18n::I18n;
use crate::locale::Locale;
use crate::surface::{Hook, SurfaceHost, TextSurface};
use crate::switcher::LocaleSwitcher;
use crate::translations::{FeatureKey, TranslationTable};
use anyhow::Result;
use chrono::Datelike;
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// The terminal page: every bound hook and its current text.
#[derive(Debug, Clone)]
pub struct PageModel {
    texts: BTreeMap<Hook, String>,
    brand: String,
    year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct PageSnapshot<'a> {
    pub lang: &'a str,
    pub indicator: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub description2: &'a str,
    pub cta: &'a str,
    pub progress: &'a str,
    pub features: Vec<&'a str>,
    pub brand: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl PageModel {
    pub fn new(brand: &str, show_year: bool) -> Self {
        let year = show_year.then(|| chrono::Local::now().year());
        Self {
            texts: Hook::all().into_iter().map(|h| (h, String::new())).collect(),
            brand: brand.to_string(),
            year,
        }
    }

    /// Remove a hook, as if the view had no such element.
    #[cfg(test)]
    pub fn unbind(&mut self, hook: Hook) {
        self.texts.remove(&hook);
    }

    pub fn text(&self, hook: Hook) -> &str {
        self.texts.get(&hook).map(String::as_str).unwrap_or("")
    }

    pub fn feature_titles(&self) -> Vec<&str> {
        (0..FeatureKey::ORDER.len())
            .map(|i| self.text(Hook::FeatureTitle(i)))
            .collect()
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn footer(&self, i18n: &I18n) -> Option<String> {
        self.year
            .map(|y| i18n.t_format("footer", &[&y.to_string(), &self.brand]))
    }

    pub fn snapshot(&self) -> PageSnapshot<'_> {
        PageSnapshot {
            lang: self.text(Hook::RootLang),
            indicator: self.text(Hook::LanguageIndicator),
            title: self.text(Hook::Title),
            description: self.text(Hook::Description),
            description2: self.text(Hook::Description2),
            cta: self.text(Hook::Cta),
            progress: self.text(Hook::ProgressLabel),
            features: self.feature_titles(),
            brand: &self.brand,
            year: self.year,
        }
    }

    /// One-shot text rendering for non-interactive output.
    pub fn render_plain(&self, i18n: &I18n) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{}  {}\n\n",
            self.brand.cyan().bold(),
            format!("[{}]", i18n.t_format("language_button", &[self.text(Hook::LanguageIndicator)])).dimmed()
        ));
        out.push_str(&format!("{}\n\n", self.text(Hook::Title).bold()));
        out.push_str(&format!("{}\n\n", self.text(Hook::Description)));
        out.push_str(&format!("{}\n\n", self.text(Hook::Description2)));
        out.push_str(&format!("{}\n", i18n.t("features_heading").yellow().bold()));
        for title in self.feature_titles() {
            out.push_str(&format!("  • {}\n", title));
        }
        out.push('\n');
        out.push_str(&format!("{}\n", self.text(Hook::ProgressLabel).dimmed()));
        out.push_str(&format!("{}\n", self.text(Hook::Cta).green()));
        if let Some(footer) = self.footer(i18n) {
            out.push_str(&format!("\n{}\n", footer.dimmed()));
        }
        out
    }
}

/// Build a page for `config` with `locale` applied.
pub fn build_page(config: &Config, locale: Locale) -> crate::error::Result<PageModel> {
    let mut page = PageModel::new(&config.page.brand, config.page.show_year);
    let mut switcher = LocaleSwitcher::new(TranslationTable::builtin(), locale)?;
    switcher.apply_locale(locale, &mut page)?;
    Ok(page)
}

/// Print the page once, as colored text or JSON.
pub fn print_page(config: &Config, locale: Locale, json: bool) -> Result<()> {
    let page = build_page(config, locale)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&page.snapshot())?);
    } else {
        print!("{}", page.render_plain(&I18n::new(locale)));
    }
    Ok(())
}

impl SurfaceHost for PageModel {
    fn surface(&mut self, hook: Hook) -> Option<&mut dyn TextSurface> {
        self.texts.get_mut(&hook).map(|s| s as &mut dyn TextSurface)
    }
}
