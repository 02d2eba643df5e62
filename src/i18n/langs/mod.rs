// src/i18n/langs/mod.rs

use rust_embed::RustEmbed;

/// Embedded UI string tables, one flat `key: value` JSON map per
/// supported language code.
#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;
