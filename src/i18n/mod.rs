// src/i18n/mod.rs
//
// Two layers of localized text:
//   - record fields (`BilingualText::resolve`) supplied by the data source
//   - chrome strings (`catalog`) shipped with the binary
// Both share the same deterministic fallback order.

pub mod catalog;
pub mod context;
pub mod error;
pub mod langs;
pub mod types;

pub use catalog::{available_languages, cache_size, clear_cache, has_key, set_cache_max, tr, tr_in};
pub use context::{active, epoch, switch, switch_code};
pub use error::TranslationError;
pub use types::{BilingualText, Language, SUPPORTED_LANGUAGES};

use crate::core::error::Result;

/// Loads the string tables strictly and sets the active language.
pub fn init(lang: Language) -> Result<()> {
    catalog::init()?;
    context::switch(lang);
    Ok(())
}

#[macro_export]
macro_rules! t {
    ($key:expr) => { $crate::i18n::tr($key, &[]) };
    ($key:expr, $($arg:expr),+) => { $crate::i18n::tr($key, &[$($arg),+]) };
}
