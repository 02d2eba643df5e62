// src/menu/card.rs - Display-card projection of a menu record
use crate::core::prelude::*;
use crate::i18n::catalog;
use crate::menu::types::MenuItem;

/// Everything a menu card shows, already resolved for one language.
/// Owns its strings so it can outlive the record snapshot it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCard {
    pub id: String,
    pub title: String,
    pub blurb: String,
    pub price_line: String,
    pub image: String,
    pub image_alt: String,
}

impl MenuCard {
    pub fn compose(item: &MenuItem, lang: Language) -> Self {
        let title = item.name.resolve(lang).to_string();
        let price = format!("{:.2}", item.price);
        Self {
            id: item.id.clone(),
            blurb: item.description.resolve(lang).to_string(),
            price_line: catalog::tr_in(lang, "menu.card.price", &[&price]),
            image: item.image.clone(),
            image_alt: catalog::tr_in(lang, "menu.card.image_alt", &[&title]),
            title,
        }
    }
}

/// Composes the whole card list for one render pass.
pub fn compose_all(items: &[MenuItem], lang: Language) -> Vec<MenuCard> {
    items.iter().map(|item| MenuCard::compose(item, lang)).collect()
}
