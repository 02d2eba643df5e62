// src/i18n/catalog.rs - Keyed UI string catalog
//
// Chrome strings (labels, headings, status lines) live in embedded
// per-language JSON tables, separate from record-level BilingualText
// fields which arrive from the data source.
use crate::core::constants::CATALOG_CACHE_MAX;
use crate::core::error::{AppError, Result};
use crate::i18n::error::TranslationError;
use crate::i18n::langs::Langs;
use crate::i18n::types::{Language, SUPPORTED_LANGUAGES};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

fn format_params(template: &str, params: &[&str]) -> String {
    params
        .iter()
        .enumerate()
        .fold(template.to_string(), |mut text, (i, param)| {
            text = text.replace(&format!("{{{}}}", i), param);
            if text.contains("{}") {
                text = text.replacen("{}", param, 1);
            }
            text
        })
}

struct Catalog {
    tables: HashMap<Language, HashMap<String, String>>,
    cache: HashMap<String, String>,
    cache_max: usize,
}

impl Catalog {
    fn load_embedded() -> Self {
        let mut tables = HashMap::new();
        for lang in SUPPORTED_LANGUAGES {
            match Self::load_table(lang) {
                Ok(table) => {
                    tables.insert(lang, table);
                }
                Err(e) => {
                    log::error!("Failed to load string table for '{}': {}", lang.code(), e);
                    tables.insert(lang, HashMap::new());
                }
            }
        }
        Self {
            tables,
            cache: HashMap::new(),
            cache_max: CATALOG_CACHE_MAX,
        }
    }

    fn load_table(lang: Language) -> Result<HashMap<String, String>> {
        let filename = format!("{}.json", lang.code());
        let content = Langs::get(&filename).ok_or_else(|| {
            AppError::Translation(TranslationError::LoadError(format!(
                "File not found: {}",
                filename
            )))
        })?;

        let content_str = std::str::from_utf8(content.data.as_ref())
            .map_err(|e| AppError::Translation(TranslationError::LoadError(e.to_string())))?;

        serde_json::from_str(content_str)
            .map_err(|e| AppError::Translation(TranslationError::LoadError(e.to_string())))
    }

    fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&lang)
            .and_then(|t| t.get(key))
            .or_else(|| {
                // Same fallback order as BilingualText::resolve.
                SUPPORTED_LANGUAGES
                    .iter()
                    .find_map(|l| self.tables.get(l).and_then(|t| t.get(key)))
            })
            .map(String::as_str)
    }

    fn translate(&mut self, lang: Language, key: &str, params: &[&str]) -> String {
        let cache_key = if params.is_empty() {
            format!("{}:{}", lang.code(), key)
        } else {
            format!("{}:{}:{}", lang.code(), key, params.join(":"))
        };

        if let Some(cached) = self.cache.get(&cache_key) {
            return cached.clone();
        }

        let text = match self.lookup(lang, key) {
            Some(template) => format_params(template, params),
            None => {
                log::warn!("Catalog key '{}' missing in every language", key);
                format!("missing: {}", key)
            }
        };

        if self.cache.len() >= self.cache_max {
            self.cache.clear();
            log::debug!("Catalog cache cleared due to size limit");
        }
        self.cache.insert(cache_key, text.clone());
        text
    }

    fn has_key(&self, key: &str) -> bool {
        self.tables.values().any(|t| t.contains_key(key))
    }
}

static CATALOG: Lazy<RwLock<Catalog>> = Lazy::new(|| RwLock::new(Catalog::load_embedded()));

/// Strict load check. The lazy singleton tolerates a broken table (logs
/// and serves the other language); init() is for hosts that want a hard
/// failure at startup instead.
pub fn init() -> Result<()> {
    for lang in SUPPORTED_LANGUAGES {
        Catalog::load_table(lang)?;
    }
    Ok(())
}

/// Translates `key` for the active language.
pub fn tr(key: &str, params: &[&str]) -> String {
    tr_in(super::context::active(), key, params)
}

/// Translates `key` for an explicit language, independent of the shared
/// context. Pure with respect to the context; used by tests and by hosts
/// rendering a language preview.
pub fn tr_in(lang: Language, key: &str, params: &[&str]) -> String {
    CATALOG.write().unwrap().translate(lang, key, params)
}

pub fn has_key(key: &str) -> bool {
    CATALOG.read().unwrap().has_key(key)
}

/// Applies the configured cache bound. The cache is cleared right away
/// when it already sits at or above the new bound.
pub fn set_cache_max(max: usize) {
    let mut catalog = CATALOG.write().unwrap();
    catalog.cache_max = max;
    if catalog.cache.len() >= catalog.cache_max {
        catalog.cache.clear();
        log::debug!("Catalog cache cleared due to size limit");
    }
}

pub fn cache_size() -> usize {
    CATALOG.read().unwrap().cache.len()
}

pub fn clear_cache() {
    CATALOG.write().unwrap().cache.clear();
}

/// Language codes discovered from the embedded table folder.
pub fn available_languages() -> Vec<String> {
    Langs::iter()
        .filter_map(|f| {
            let filename = f.as_ref();
            filename.strip_suffix(".json").map(|s| s.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_fill_positional_and_anonymous_slots() {
        assert_eq!(format_params("Price: {0} Br", &["120"]), "Price: 120 Br");
        assert_eq!(format_params("{} + {}", &["a", "b"]), "a + b");
        assert_eq!(format_params("plain", &[]), "plain");
    }
}
