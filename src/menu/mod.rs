pub mod card;
pub mod types;

pub use card::{compose_all, MenuCard};
pub use types::{parse_menu, MenuItem};
