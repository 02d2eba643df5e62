pub const APP_TITLE: &str = "GUEST MENU";
pub const CONFIG_FILE: &str = "guest-menu.toml";
pub const DEFAULT_REVEAL_STEP_MS: u64 = 45;
pub const MIN_REVEAL_STEP_MS: u64 = 10;
pub const MAX_REVEAL_STEP_MS: u64 = 500;
pub const CATALOG_CACHE_MAX: usize = 1000;
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
