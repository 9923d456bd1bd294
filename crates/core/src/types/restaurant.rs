//! Restaurant and menu item records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Browsing categories recognised by the catalog, `All` first.
pub const CATEGORIES: [&str; 7] = [
    "All", "Pizza", "Burgers", "Sushi", "Healthy", "Dessert", "Indian",
];

/// A restaurant as presented to the ordering flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub eta_minutes: u32,
    /// Delivery fee, charged per order.
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
    pub price_level: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Restaurant {
    /// Identity-only view embedded in orders.
    #[must_use]
    pub fn summary(&self) -> RestaurantSummary {
        RestaurantSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// The part of a restaurant an order needs to remember.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub id: String,
    pub name: String,
}

/// One dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}
