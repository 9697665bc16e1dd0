//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Starter category set shown in menu form dropdowns.
///
/// Categories are stored as free text so the set stays extensible without a
/// migration; this list is only the default offering.
pub const CATEGORIES: &[&str] = &["Appetizer", "Main Course", "Dessert", "Beverage"];

/// Menu item entity — the catalog's source of truth for price and availability
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Menu item payload, used by both create and update (update is a full
/// overwrite, matching the edit form)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}
