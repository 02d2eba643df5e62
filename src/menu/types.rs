// src/menu/types.rs - Menu records from the external data source
use crate::core::prelude::*;
use serde::{Deserialize, Serialize};

/// One dish as delivered by the upstream API. Read-only in this layer;
/// validation happens once at the parse boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: BilingualText,
    pub description: BilingualText,
    pub price: f64,
    pub image: String,
}

impl MenuItem {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::Validation("menu item with empty id".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::Validation(format!(
                "menu item '{}' has invalid price {}",
                self.id, self.price
            )));
        }
        self.name.validate(&format!("{}.name", self.id))?;
        self.description
            .validate(&format!("{}.description", self.id))?;
        Ok(())
    }
}

/// Parses a JSON array of menu records and rejects malformed ones.
/// The rest of the layer may then assume well-formed input.
pub fn parse_menu(json: &str) -> Result<Vec<MenuItem>> {
    let items: Vec<MenuItem> = serde_json::from_str(json)
        .map_err(|e| AppError::Validation(format!("menu parse: {}", e)))?;

    for item in &items {
        item.validate()?;
    }

    log::debug!("Parsed {} menu items", items.len());
    Ok(items)
}
