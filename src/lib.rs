// Module definitions
pub mod attendance;
pub mod core;
pub mod i18n;
pub mod menu;

// Essential re-exports
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::i18n::types::{BilingualText, Language, SUPPORTED_LANGUAGES};
pub use crate::i18n::{context, TranslationError};
pub use crate::menu::{compose_all, parse_menu, MenuCard, MenuItem};

// Main entry point
pub fn init() -> Result<Config> {
    let config = Config::load_default()?;
    init_with_config(&config)?;
    Ok(config)
}

// Convenience functions
pub fn init_with_config(config: &Config) -> Result<()> {
    i18n::init(config.language)?;
    i18n::catalog::set_cache_max(config.catalog_cache_max);
    Ok(())
}
