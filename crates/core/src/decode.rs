//! Tolerant decoding of backend payloads into typed records.
//!
//! The backend is an optional collaborator and its JSON is schema-loose:
//! the same field can arrive under different names depending on the
//! deployment. Each decoder documents its field priority list and returns
//! a typed record or a [`DecodeError`]. An entity without a usable id is
//! an error, never a guessed value; non-identity fields take documented
//! defaults instead.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde_json::Value;
use thiserror::Error;

use crate::types::order::OrderAck;
use crate::types::restaurant::{MenuItem, Restaurant};
use crate::types::tracking::TrackingStep;

/// Failure to turn a backend payload into a typed record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// No accepted key carried the entity id.
    #[error("{entity} payload has no usable id")]
    MissingId { entity: &'static str },

    /// The payload is not the JSON shape the endpoint promises.
    #[error("expected {expected} in {entity} payload")]
    UnexpectedShape {
        entity: &'static str,
        expected: &'static str,
    },
}

/// Decode one restaurant object.
///
/// Field priority: id ← `id`, `_id`, `restaurantId` (required); name ←
/// `name`, `title`; category ← `category`, `cuisine`; rating ← `rating`;
/// minutes ← `etaMinutes`, `eta`; fee ← `fee`, `deliveryFee`; price level
/// ← `priceLevel`; tags ← `tags`.
///
/// # Errors
///
/// Returns [`DecodeError::MissingId`] when no id key is present.
pub fn restaurant(value: &Value) -> Result<Restaurant, DecodeError> {
    let id = id_string(value, &["id", "_id", "restaurantId"])
        .ok_or(DecodeError::MissingId { entity: "restaurant" })?;

    Ok(Restaurant {
        id,
        name: first_str(value, &["name", "title"])
            .unwrap_or("Restaurant")
            .to_owned(),
        category: first_str(value, &["category", "cuisine"])
            .unwrap_or("All")
            .to_owned(),
        rating: first_f64(value, &["rating"]).unwrap_or(4.5),
        eta_minutes: first_minutes(value, &["etaMinutes", "eta"]).unwrap_or(25),
        fee: first_decimal(value, &["fee", "deliveryFee"]).unwrap_or_else(|| Decimal::new(249, 2)),
        price_level: first_str(value, &["priceLevel"]).unwrap_or("$$").to_owned(),
        tags: string_array(value.get("tags")),
    })
}

/// Decode one menu item object.
///
/// Field priority: id ← `id`, `_id`, `menuItemId` (required); name ←
/// `name`, `title`; description ← `desc`, `description`; price ← `price`.
///
/// # Errors
///
/// Returns [`DecodeError::MissingId`] when no id key is present.
pub fn menu_item(value: &Value) -> Result<MenuItem, DecodeError> {
    let id = id_string(value, &["id", "_id", "menuItemId"])
        .ok_or(DecodeError::MissingId { entity: "menu item" })?;

    Ok(MenuItem {
        id,
        name: first_str(value, &["name", "title"]).unwrap_or("Item").to_owned(),
        desc: first_str(value, &["desc", "description"])
            .unwrap_or("")
            .to_owned(),
        price: first_decimal(value, &["price"]).unwrap_or(Decimal::ZERO),
    })
}

/// Decode a create-order acknowledgement.
///
/// Field priority: id ← `id`, `orderId`, `_id` (required); `createdAt`
/// is kept only when it parses as RFC 3339.
///
/// # Errors
///
/// Returns [`DecodeError::MissingId`] when the backend acknowledged the
/// order without any recognisable identifier; callers then synthesize a
/// local order instead.
pub fn order_ack(value: &Value) -> Result<OrderAck, DecodeError> {
    let id = id_string(value, &["id", "orderId", "_id"])
        .ok_or(DecodeError::MissingId { entity: "order" })?;

    let created_at = value
        .get("createdAt")
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|parsed| parsed.with_timezone(&Utc));

    Ok(OrderAck { id, created_at })
}

/// Decode a tracking payload into its step sequence.
///
/// The payload must carry a `steps` array. Step field priority: key ←
/// `key`, `status`; title ← `title`, `label`, `status`; meta ← `meta`,
/// `message`; active ← `active` (boolean, defaults to false). Steps are
/// individually tolerant: a step object missing everything still decodes
/// to the placeholder step.
///
/// # Errors
///
/// Returns [`DecodeError::UnexpectedShape`] when `steps` is absent or not
/// an array.
pub fn tracking_steps(value: &Value) -> Result<Vec<TrackingStep>, DecodeError> {
    let steps = value
        .get("steps")
        .and_then(Value::as_array)
        .ok_or(DecodeError::UnexpectedShape {
            entity: "tracking",
            expected: "a steps array",
        })?;

    Ok(steps.iter().map(tracking_step).collect())
}

fn tracking_step(value: &Value) -> TrackingStep {
    TrackingStep {
        key: first_str(value, &["key", "status"]).unwrap_or("step").to_owned(),
        title: first_str(value, &["title", "label", "status"])
            .unwrap_or("Update")
            .to_owned(),
        meta: first_str(value, &["meta", "message"]).unwrap_or("").to_owned(),
        active: value.get("active").and_then(Value::as_bool).unwrap_or(false),
    }
}

/// First key holding a non-empty string, or a number coerced to text
/// (backends disagree on whether ids are strings).
fn id_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(key) {
        Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    })
}

fn first_str<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .filter(|found| !found.is_empty())
}

fn first_f64(value: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| value.get(key).and_then(Value::as_f64))
}

fn first_decimal(value: &Value, keys: &[&str]) -> Option<Decimal> {
    first_f64(value, keys).and_then(Decimal::from_f64)
}

fn first_minutes(value: &Value, keys: &[&str]) -> Option<u32> {
    first_decimal(value, keys).and_then(|minutes| minutes.round().to_u32())
}

fn string_array(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
