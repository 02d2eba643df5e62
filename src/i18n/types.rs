// src/i18n/types.rs - Language codes and bilingual record fields
use crate::core::error::{AppError, Result};
use crate::i18n::error::TranslationError;
use serde::{Deserialize, Serialize};

/// The closed set of display languages. `En` is the fixed fallback,
/// being the first supported code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Am,
}

pub const SUPPORTED_LANGUAGES: [Language; 2] = [Language::En, Language::Am];

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Am => "am",
        }
    }

    /// Native-script label, used by language switcher UIs.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Am => "አማርኛ",
        }
    }

    pub fn fallback() -> Language {
        SUPPORTED_LANGUAGES[0]
    }

    pub fn from_code(code: &str) -> Result<Language> {
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| {
                AppError::Translation(TranslationError::InvalidLanguage(code.to_string()))
            })
    }

    /// The other supported language, for two-way switcher toggles.
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Am,
            Language::Am => Language::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The same semantic content in both supported languages. At least one
/// entry must be populated; empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub am: Option<String>,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, am: impl Into<String>) -> Self {
        Self {
            en: Some(en.into()),
            am: Some(am.into()),
        }
    }

    pub fn en_only(en: impl Into<String>) -> Self {
        Self {
            en: Some(en.into()),
            am: None,
        }
    }

    pub fn am_only(am: impl Into<String>) -> Self {
        Self {
            en: None,
            am: Some(am.into()),
        }
    }

    /// Exact lookup for one language. Empty values are treated as absent
    /// so upstream records with `""` placeholders still fall back cleanly.
    pub fn get(&self, lang: Language) -> Option<&str> {
        let value = match lang {
            Language::En => self.en.as_deref(),
            Language::Am => self.am.as_deref(),
        };
        value.filter(|s| !s.trim().is_empty())
    }

    /// Resolves the display string for `lang`. If the requested language
    /// has no entry, the first populated language in supported order is
    /// returned instead. Pure and deterministic; a missing translation is
    /// never user-visible as an error.
    pub fn resolve(&self, lang: Language) -> &str {
        self.get(lang)
            .or_else(|| SUPPORTED_LANGUAGES.iter().find_map(|l| self.get(*l)))
            .unwrap_or_default()
    }

    /// Enforces the at-least-one-language invariant. Called at the record
    /// parse boundary; `resolve` itself assumes validated input.
    pub fn validate(&self, field: &str) -> Result<()> {
        if SUPPORTED_LANGUAGES.iter().any(|l| self.get(*l).is_some()) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "field '{}' has no translation in any supported language",
                field
            )))
        }
    }
}
