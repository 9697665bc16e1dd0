//! Order Model

use serde::{Deserialize, Serialize};

/// Order status
///
/// `pending` (just placed) / `preparing` (kitchen working) /
/// `served` (delivered to table) / `cancelled` (voided, not billed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Served,
    Cancelled,
}

impl OrderStatus {
    /// Parse a status string, `None` for anything outside the enumerated set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "preparing" => Some(Self::Preparing),
            "served" => Some(Self::Served),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Served => "served",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order entity
///
/// `total_price` is a snapshot: unit price at creation time x quantity,
/// persisted as a value and never recomputed from the current catalog price.
/// Only `status` may change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub table_number: i64,
    pub item_id: i64,
    pub quantity: i64,
    pub total_price: f64,
    pub status: OrderStatus,
    pub order_date: i64,
}

/// Order joined with the current item name/price (for list and detail views).
///
/// `item_price` is the item's price *now*; `total_price` stays frozen at the
/// price in effect when the order was placed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderWithItem {
    pub id: i64,
    pub table_number: i64,
    pub item_id: i64,
    pub item_name: String,
    pub item_price: f64,
    pub quantity: i64,
    pub total_price: f64,
    pub status: OrderStatus,
    pub order_date: i64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_number: i64,
    pub item_id: i64,
    pub quantity: i64,
}
