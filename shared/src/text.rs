//! Bilingual display text
//!
//! Every customer-facing label in the catalog carries an Arabic and an
//! English variant. The storefront picks one at render time; the engine
//! keeps both so cart snapshots stay language-agnostic.

use serde::{Deserialize, Serialize};

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic (RTL)
    Ar,
    /// English
    #[default]
    En,
}

/// A bilingual label (Arabic + English)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LocalizedText {
    pub ar: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// Get the label for a language, falling back to the other variant
    /// when the requested one is empty.
    pub fn get(&self, language: Language) -> &str {
        let (primary, fallback) = match language {
            Language::Ar => (&self.ar, &self.en),
            Language::En => (&self.en, &self.ar),
        };
        if primary.is_empty() { fallback } else { primary }
    }
}

impl std::fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get(Language::En))
    }
}
