// src/core/config.rs - TOML configuration for the presentation layer
use crate::core::constants::{
    CATALOG_CACHE_MAX, CONFIG_FILE, DEFAULT_REVEAL_STEP_MS, MAX_REVEAL_STEP_MS, MIN_REVEAL_STEP_MS,
};
use crate::core::error::{AppError, Result};
use crate::i18n::types::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    language: LanguageConfig,
    #[serde(default)]
    display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct LanguageConfig {
    #[serde(default = "default_language")]
    current: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct DisplayConfig {
    #[serde(default = "default_reveal_step")]
    reveal_step_ms: u64,
    #[serde(default = "default_cache_max")]
    catalog_cache_max: usize,
}

fn default_language() -> String {
    Language::fallback().code().to_string()
}

fn default_reveal_step() -> u64 {
    DEFAULT_REVEAL_STEP_MS
}

fn default_cache_max() -> usize {
    CATALOG_CACHE_MAX
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            current: default_language(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reveal_step_ms: default_reveal_step(),
            catalog_cache_max: default_cache_max(),
        }
    }
}

/// Runtime view of the config file. Missing file means defaults;
/// malformed TOML is surfaced, never silently replaced.
#[derive(Debug, Clone)]
pub struct Config {
    pub language: Language,
    pub reveal_step_ms: u64,
    pub catalog_cache_max: usize,
    path: PathBuf,
}

impl Config {
    pub fn load_default() -> Result<Self> {
        Self::load(Path::new(CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            toml::from_str::<ConfigFile>(&raw)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            ConfigFile {
                language: LanguageConfig::default(),
                display: DisplayConfig::default(),
            }
        };

        let language = Language::from_code(&file.language.current)?;
        let reveal_step_ms = file
            .display
            .reveal_step_ms
            .clamp(MIN_REVEAL_STEP_MS, MAX_REVEAL_STEP_MS);

        Ok(Self {
            language,
            reveal_step_ms,
            catalog_cache_max: file.display.catalog_cache_max,
            path: path.to_path_buf(),
        })
    }

    /// Persists a language switch back to the config file, keeping
    /// the display section intact.
    pub fn save_language(&mut self, lang: Language) -> Result<()> {
        self.language = lang;
        let file = ConfigFile {
            language: LanguageConfig {
                current: lang.code().to_string(),
            },
            display: DisplayConfig {
                reveal_step_ms: self.reveal_step_ms,
                catalog_cache_max: self.catalog_cache_max,
            },
        };
        let raw = toml::to_string_pretty(&file)
            .map_err(|e| AppError::Config(format!("serialize: {}", e)))?;
        std::fs::write(&self.path, raw)?;
        log::info!("Saved language '{}' to {}", lang.code(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
