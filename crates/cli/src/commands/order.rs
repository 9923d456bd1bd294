//! Order placement and tracking.
//!
//! # Usage
//!
//! ```bash
//! # One Margherita and two Pepperoni, then three tracking refreshes
//! gx order r_pizza_harbor m_ph_1 m_ph_2 m_ph_2 --refreshes 3
//! ```
//!
//! Starts from an empty cart so the order holds exactly the items given.
//! With no backend configured the order is recorded locally and tracking
//! runs the time-based simulation.

use std::time::Duration;

use thiserror::Error;

use gourmet_express_client::state::AppState;
use gourmet_express_core::TrackingMode;

/// Pause between tracking refreshes, matching the auto-poll cadence.
const REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// An item id is not on the restaurant's menu.
    #[error("No menu item with id {0}. Run `gx menu <restaurant-id>` to list ids")]
    UnknownItem(String),

    /// The delivery profile is missing required fields.
    #[error("Delivery profile is incomplete. Set name, address and city with `gx profile`")]
    IncompleteProfile,
}

/// Place an order for `item_ids` from `restaurant_id`, then poll tracking
/// `refreshes` times.
pub async fn place(
    state: &mut AppState,
    restaurant_id: &str,
    item_ids: &[String],
    refreshes: u32,
) -> Result<(), OrderError> {
    let restaurant = state.catalog().restaurant(restaurant_id).await.data;
    let menu = state.catalog().menu(restaurant_id).await.data;

    state.clear_cart();
    for item_id in item_ids {
        let item = menu
            .iter()
            .find(|item| item.id == *item_id)
            .ok_or_else(|| OrderError::UnknownItem(item_id.clone()))?;
        state.add_item(&restaurant.id, item);
    }

    if !state.can_checkout() {
        return Err(OrderError::IncompleteProfile);
    }

    let totals = state.totals();
    tracing::info!(
        "Ordering from {}: {} items, subtotal ${}, delivery ${}",
        restaurant.name,
        totals.item_count,
        totals.subtotal,
        restaurant.fee
    );

    let order = state.start_checkout(&restaurant, restaurant.fee).await;
    tracing::info!("Order {} placed at {}", order.id, order.created_at);
    print_timeline(state);

    for round in 1..=refreshes {
        tokio::time::sleep(REFRESH_INTERVAL).await;
        state.refresh_tracking().await;
        tracing::info!("");
        tracing::info!("Refresh {round} of {refreshes}:");
        print_timeline(state);
    }
    Ok(())
}

fn print_timeline(state: &AppState) {
    let tracking = state.tracking();
    let mode = match tracking.mode {
        TrackingMode::Api => "Live",
        TrackingMode::Mock => "Simulated",
        TrackingMode::None => "Idle",
    };
    tracing::info!("Tracking: {mode} updates");
    for step in &tracking.steps {
        let marker = if step.active { "x" } else { " " };
        tracing::info!("  [{marker}] {} - {}", step.title, step.meta);
    }
}
