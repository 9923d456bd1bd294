//! Single-restaurant cart and the pure operations that produce new carts.
//!
//! Every operation returns a fresh [`Cart`] instead of mutating its input,
//! so callers own persistence and can diff states freely.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::restaurant::MenuItem;

/// One line of a cart.
///
/// Owned exclusively by [`Cart`]; a line whose quantity drops to zero is
/// removed rather than kept around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub qty: u32,
}

impl From<&MenuItem> for CartLine {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            qty: 1,
        }
    }
}

/// The transient set of items a user intends to order, scoped to one
/// restaurant at a time.
///
/// Invariants: every line belongs to `restaurant_id`, and `restaurant_id`
/// is `None` exactly when `items` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub restaurant_id: Option<String>,
}

impl Cart {
    /// The canonical empty cart.
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            items: Vec::new(),
            restaurant_id: None,
        }
    }

    /// True when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of `item` on behalf of `restaurant_id`.
    ///
    /// Adding from a different restaurant than the one the cart currently
    /// holds discards the cart first; carts never mix restaurants. An item
    /// already present gains one unit, otherwise a new line starts at one.
    #[must_use]
    pub fn with_line(&self, item: &MenuItem, restaurant_id: &str) -> Self {
        let mut next = if self
            .restaurant_id
            .as_deref()
            .is_some_and(|held| held != restaurant_id)
        {
            Self::cleared()
        } else {
            self.clone()
        };

        match next.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.qty = line.qty.saturating_add(1),
            None => next.items.push(CartLine::from(item)),
        }
        next.restaurant_id = Some(restaurant_id.to_owned());
        next
    }

    /// Overwrite the quantity of the line with `item_id`.
    ///
    /// A resulting quantity at or below zero removes the line; an unknown
    /// id is a no-op. Emptying the cart resets `restaurant_id` to `None`.
    #[must_use]
    pub fn with_qty(&self, item_id: &str, qty: i64) -> Self {
        let mut items = Vec::with_capacity(self.items.len());
        for line in &self.items {
            if line.id == item_id {
                if qty > 0 {
                    let qty = u32::try_from(qty).unwrap_or(u32::MAX);
                    items.push(CartLine {
                        qty,
                        ..line.clone()
                    });
                }
            } else {
                items.push(line.clone());
            }
        }

        let restaurant_id = if items.is_empty() {
            None
        } else {
            self.restaurant_id.clone()
        };
        Self {
            items,
            restaurant_id,
        }
    }

    /// Derived totals; recomputed on demand, never stored.
    #[must_use]
    pub fn totals(&self) -> Totals {
        let mut item_count: u32 = 0;
        let mut subtotal = Decimal::ZERO;
        for line in &self.items {
            item_count = item_count.saturating_add(line.qty);
            subtotal += Decimal::from(line.qty) * line.price;
        }
        Totals {
            item_count,
            subtotal,
        }
    }
}

/// Sum of quantities and exact-decimal subtotal over a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub item_count: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}
