//! Order payloads and the active-order record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::cart::{Cart, CartLine};
use crate::types::profile::{PaymentMethod, Profile};
use crate::types::restaurant::RestaurantSummary;

/// Delivery address lines sent with an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub name: String,
    pub phone: String,
    pub address1: String,
    pub city: String,
}

impl From<&Profile> for DeliveryAddress {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            phone: profile.phone.clone(),
            address1: profile.address1.clone(),
            city: profile.city.clone(),
        }
    }
}

/// One line of a create-order payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: String,
    pub name: String,
    pub qty: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            qty: line.qty,
            price: line.price,
        }
    }
}

/// Request body for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub restaurant_id: String,
    pub items: Vec<OrderLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,
    pub address: DeliveryAddress,
    pub payment_method: PaymentMethod,
}

impl OrderRequest {
    /// Assemble the payload checkout submits from the current cart and
    /// profile. `restaurant_id` comes from the resolved restaurant, not the
    /// cart, so an (unexpectedly) empty cart still addresses somewhere real.
    #[must_use]
    pub fn assemble(cart: &Cart, profile: &Profile, restaurant_id: &str, fee: Decimal) -> Self {
        Self {
            restaurant_id: restaurant_id.to_owned(),
            items: cart.items.iter().map(OrderLine::from).collect(),
            delivery_fee: fee,
            address: DeliveryAddress::from(profile),
            payment_method: profile.payment,
        }
    }
}

/// What the backend acknowledged about a created order.
///
/// Produced by [`crate::decode::order_ack`]; `created_at` is `None` when the
/// acknowledgement carried no parseable timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAck {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// The single order a device is currently tracking.
///
/// Created by checkout; at most one exists at a time. Cleared explicitly or
/// superseded by the next checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveOrder {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub restaurant: RestaurantSummary,
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::restaurant::MenuItem;

    #[test]
    fn test_assemble_wire_shape() {
        let item = MenuItem {
            id: "m1".to_owned(),
            name: "Margherita".to_owned(),
            desc: String::new(),
            price: Decimal::new(1250, 2),
        };
        let cart = Cart::cleared().with_line(&item, "r1").with_line(&item, "r1");
        let profile = Profile {
            name: "Alex".to_owned(),
            phone: "555-0101".to_owned(),
            address1: "1 Harbor St".to_owned(),
            city: "Portside".to_owned(),
            payment: PaymentMethod::Card,
        };

        let request = OrderRequest::assemble(&cart, &profile, "r1", Decimal::new(249, 2));
        let wire = serde_json::to_value(&request).unwrap();

        assert_eq!(wire["restaurantId"], "r1");
        assert_eq!(wire["deliveryFee"], 2.49);
        assert_eq!(wire["paymentMethod"], "card");
        assert_eq!(wire["address"]["address1"], "1 Harbor St");
        assert_eq!(wire["items"][0]["qty"], 2);
        assert_eq!(wire["items"][0]["price"], 12.5);
    }
}
