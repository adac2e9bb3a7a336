use crate::error::{PageError, Result};
use crate::locale::Locale;
use crate::surface::{Hook, SurfaceHost};
use crate::translations::{FeatureKey, TranslationTable};
use tracing::{debug, info, warn};

/// Outcome of one `apply_locale` pass.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub updated: usize,
    /// Hooks the host did not expose; each one was skipped.
    pub skipped: Vec<PageError>,
}

/// Owns the active locale and rewrites a host's surfaces from the table.
pub struct LocaleSwitcher {
    table: TranslationTable,
    active: Locale,
}

impl LocaleSwitcher {
    pub fn new(table: TranslationTable, initial: Locale) -> Result<Self> {
        if !table.contains(initial) {
            return Err(PageError::UnknownLocale(initial.tag().to_string()));
        }
        Ok(Self { table, active: initial })
    }

    pub fn active(&self) -> Locale {
        self.active
    }

    pub fn apply_locale<H>(&mut self, tag: Locale, host: &mut H) -> Result<ApplyReport>
    where
        H: SurfaceHost + ?Sized,
    {
        let record = self.table.get(tag)?;

        let mut writes: Vec<(Hook, String)> = vec![
            (Hook::Title, record.title.clone()),
            (Hook::Description, record.description.clone()),
            (Hook::Description2, record.description2.clone()),
            (Hook::Cta, record.cta.clone()),
            (Hook::ProgressLabel, record.progress.clone()),
        ];
        for (i, key) in FeatureKey::ORDER.iter().enumerate() {
            writes.push((Hook::FeatureTitle(i), record.features.get(*key).to_string()));
        }
        writes.push((Hook::LanguageIndicator, tag.indicator()));
        writes.push((Hook::RootLang, tag.root_lang().to_string()));

        let mut report = ApplyReport::default();
        for (hook, text) in writes {
            match host.surface(hook) {
                Some(surface) => {
                    surface.set_text(&text);
                    report.updated += 1;
                }
                None => {
                    warn!(hook = %hook, locale = %tag, "surface missing, skipping");
                    report.skipped.push(PageError::MissingUiHook(hook));
                }
            }
        }

        debug!(
            from = %self.active,
            to = %tag,
            updated = report.updated,
            skipped = report.skipped.len(),
            "locale applied"
        );
        self.active = tag;
        Ok(report)
    }

    pub fn toggle_locale<H>(&mut self, host: &mut H) -> Result<Locale>
    where
        H: SurfaceHost + ?Sized,
    {
        let next = self.active.other();
        self.apply_locale(next, host)?;
        info!(locale = %next, "language toggled");
        Ok(next)
    }
}
