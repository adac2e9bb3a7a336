use crate::error::{PageError, Result};
use crate::locale::Locale;
use std::collections::HashMap;

/// Feature cards, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKey {
    Robust,
    Scalable,
    Smart,
    Creative,
}

impl FeatureKey {
    pub const ORDER: [FeatureKey; 4] = [
        FeatureKey::Robust,
        FeatureKey::Scalable,
        FeatureKey::Smart,
        FeatureKey::Creative,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLabels {
    pub robust: String,
    pub scalable: String,
    pub smart: String,
    pub creative: String,
}

impl FeatureLabels {
    pub fn get(&self, key: FeatureKey) -> &str {
        match key {
            FeatureKey::Robust => &self.robust,
            FeatureKey::Scalable => &self.scalable,
            FeatureKey::Smart => &self.smart,
            FeatureKey::Creative => &self.creative,
        }
    }
}

/// Display strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub title: String,
    pub description: String,
    pub description2: String,
    pub cta: String,
    pub progress: String,
    pub features: FeatureLabels,
}

/// Immutable locale -> record map.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    records: HashMap<Locale, Translation>,
}

impl TranslationTable {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (Locale, Translation)>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::from_records([(Locale::En, english()), (Locale::Pt, portuguese())])
    }

    pub fn get(&self, locale: Locale) -> Result<&Translation> {
        self.records
            .get(&locale)
            .ok_or_else(|| PageError::UnknownLocale(locale.tag().to_string()))
    }

    pub fn contains(&self, locale: Locale) -> bool {
        self.records.contains_key(&locale)
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn english() -> Translation {
    Translation {
        title: "We're building something extraordinary!".to_string(),
        description: "Our digital engineering platform is under construction — crafted with bits, bytes, and bold innovation. Very soon, you'll meet a true factory of smart solutions, where robust systems, scalable applications, and high-level digital experiences are designed to reshape the software development landscape.".to_string(),
        description2: "We're assembling a tech ecosystem that blends modern architecture, intelligent automation, and user-centered design — all with a fearless dose of creativity and performance.".to_string(),
        cta: "Stay tuned. The future is almost ready — and it starts right here.".to_string(),
        progress: "Building in progress...".to_string(),
        features: FeatureLabels {
            robust: "Robust Systems".to_string(),
            scalable: "Scalable Apps".to_string(),
            smart: "Smart Solutions".to_string(),
            creative: "Creative Design".to_string(),
        },
    }
}

fn portuguese() -> Translation {
    Translation {
        title: "Estamos construindo algo extraordinário!".to_string(),
        description: "A nossa plataforma de engenharia digital está em fase de montagem — com bits, bytes e muita inovação sendo cuidadosamente encaixados. Em breve, você conhecerá uma verdadeira fábrica de soluções inteligentes, onde sistemas robustos, aplicações escaláveis e experiências digitais de alto nível serão criadas para transformar o mercado de desenvolvimento de software.".to_string(),
        description2: "Estamos preparando um ecossistema tecnológico que une arquitetura moderna, automação inteligente e design centrado no usuário. Tudo isso com um toque ousado de criatividade e performance.".to_string(),
        cta: "Fique ligado. O futuro está quase pronto — e ele começa aqui.".to_string(),
        progress: "Construção em andamento...".to_string(),
        features: FeatureLabels {
            robust: "Sistemas Robustos".to_string(),
            scalable: "Apps Escaláveis".to_string(),
            smart: "Soluções Inteligentes".to_string(),
            creative: "Design Criativo".to_string(),
        },
    }
}
