use crate::locale::Locale;
use std::collections::HashMap;

/// Strings for the terminal chrome around the page (hints, footer,
/// warnings). Page content lives in `translations`.
pub struct I18n {
    translations: HashMap<Locale, HashMap<&'static str, &'static str>>,
    current_lang: Locale,
}

impl I18n {
    pub fn new(lang: Locale) -> Self {
        let mut translations = HashMap::new();

        let mut en = HashMap::new();
        en.insert("navigate_hint", "l/Tab: language · q/Esc: quit");
        en.insert("footer", "© {0} {1}. All rights reserved.");
        en.insert("features_heading", "What we're building");
        en.insert("language_button", "Language: {0}");
        en.insert("warning_interactive_failed", "Warning: Cannot enable interactive mode, falling back to simple mode");
        en.insert("detected_locale", "Detected locale: {0} (preference: {1})");
        en.insert("no_preference", "none");
        en.insert("configured_locale", "Configured language: {0} (display.language, used instead)");
        en.insert("error_toggle", "Could not switch language");

        let mut pt = HashMap::new();
        pt.insert("navigate_hint", "l/Tab: idioma · q/Esc: sair");
        pt.insert("footer", "© {0} {1}. Todos os direitos reservados.");
        pt.insert("features_heading", "O que estamos construindo");
        pt.insert("language_button", "Idioma: {0}");
        pt.insert("warning_interactive_failed", "Aviso: não foi possível ativar o modo interativo, usando o modo simples");
        pt.insert("detected_locale", "Idioma detectado: {0} (preferência: {1})");
        pt.insert("no_preference", "nenhuma");
        pt.insert("configured_locale", "Idioma configurado: {0} (display.language, usado no lugar)");
        pt.insert("error_toggle", "Não foi possível trocar o idioma");

        translations.insert(Locale::En, en);
        translations.insert(Locale::Pt, pt);

        Self {
            translations,
            current_lang: lang,
        }
    }

    pub fn set_lang(&mut self, lang: Locale) {
        self.current_lang = lang;
    }

    pub fn t(&self, key: &str) -> String {
        if let Some(lang_map) = self.translations.get(&self.current_lang) {
            if let Some(value) = lang_map.get(key) {
                return value.to_string();
            }
        }
        key.to_string()
    }

    pub fn t_format(&self, key: &str, args: &[&str]) -> String {
        let template = self.t(key);
        let mut result = template;
        for (i, arg) in args.iter().enumerate() {
            result = result.replace(&format!("{{{}}}", i), arg);
        }
        result
    }
}
