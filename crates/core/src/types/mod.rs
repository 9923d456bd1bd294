//! Core types for Gourmet Express.
//!
//! This module provides the typed domain model for the ordering flow.

pub mod cart;
pub mod order;
pub mod profile;
pub mod restaurant;
pub mod tracking;

pub use cart::{Cart, CartLine, Totals};
pub use order::{ActiveOrder, DeliveryAddress, OrderAck, OrderLine, OrderRequest};
pub use profile::{PaymentMethod, Profile};
pub use restaurant::{CATEGORIES, MenuItem, Restaurant, RestaurantSummary};
pub use tracking::{TrackingMode, TrackingState, TrackingStep, simulated_steps};
