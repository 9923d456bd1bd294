//! The ordering workflow handle: cart, profile, active order, tracking.
//!
//! `AppState` is the single mutable surface of the crate. Commands take
//! `&mut self`, so overlapping mutations cannot compile; reads hand out
//! references. Every remote interaction degrades to local behaviour
//! instead of surfacing a failure, and every degradation is observable
//! through [`TrackingMode`] or the catalog's source tag.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use gourmet_express_core::{
    ActiveOrder, Cart, MenuItem, OrderRequest, Profile, Restaurant, Totals, TrackingMode,
    TrackingState, decode, simulated_steps,
};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::gateway::{ApiGateway, GatewayError};
use crate::storage::{LocalStore, keys};

/// One device's ordering session.
///
/// Owns the cart and profile (persisted per mutation), the at-most-one
/// active order, and its tracking timeline. The active order lives only
/// as long as this value; a new session starts with no order, matching
/// the cart-and-profile-only persistence contract.
pub struct AppState {
    gateway: ApiGateway,
    catalog: Catalog,
    store: LocalStore,
    cart: Cart,
    profile: Profile,
    active_order: Option<ActiveOrder>,
    tracking: TrackingState,
}

impl AppState {
    /// Build a session from configuration: HTTP gateway, catalog, local
    /// store, and whatever cart and profile survived the last session.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Network`] when the HTTP client cannot be
    /// built. Unreadable persisted records are not errors; the session
    /// starts from defaults instead.
    pub fn new(config: &AppConfig) -> Result<Self, GatewayError> {
        let gateway = ApiGateway::new(config)?;
        let catalog = Catalog::new(gateway.clone());
        let store = LocalStore::new(config.data_dir.clone());

        let cart = store.read(keys::CART).unwrap_or_default();
        let profile = store.read(keys::PROFILE).unwrap_or_default();

        Ok(Self {
            gateway,
            catalog,
            store,
            cart,
            profile,
            active_order: None,
            tracking: TrackingState::idle(),
        })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn totals(&self) -> Totals {
        self.cart.totals()
    }

    #[must_use]
    pub const fn active_order(&self) -> Option<&ActiveOrder> {
        self.active_order.as_ref()
    }

    #[must_use]
    pub const fn tracking(&self) -> &TrackingState {
        &self.tracking
    }

    /// Restaurant and menu reads; shares this session's gateway and cache.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// True when a backend base URL is configured.
    #[must_use]
    pub const fn has_backend(&self) -> bool {
        self.gateway.is_configured()
    }

    /// The place-order gate: a non-empty cart and a delivery-complete
    /// profile. Checkout itself does not re-check; presentation decides
    /// when to offer the button.
    #[must_use]
    pub fn can_checkout(&self) -> bool {
        !self.cart.is_empty() && self.profile.is_complete_for_delivery()
    }

    // =========================================================================
    // Cart and profile commands
    // =========================================================================

    /// Add one unit of `item` on behalf of `restaurant_id` and persist.
    pub fn add_item(&mut self, restaurant_id: &str, item: &MenuItem) {
        self.cart = self.cart.with_line(item, restaurant_id);
        self.persist_cart();
    }

    /// Overwrite a line's quantity (zero or less removes it) and persist.
    pub fn set_qty(&mut self, item_id: &str, qty: i64) {
        self.cart = self.cart.with_qty(item_id, qty);
        self.persist_cart();
    }

    /// Empty the cart and persist.
    pub fn clear_cart(&mut self) {
        self.cart = Cart::cleared();
        self.persist_cart();
    }

    /// Replace the delivery profile and persist.
    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
        if let Err(err) = self.store.write(keys::PROFILE, &self.profile) {
            warn!(error = %err, "profile not persisted");
        }
    }

    // =========================================================================
    // Order commands
    // =========================================================================

    /// Place the current cart as an order with `restaurant` for `fee`.
    ///
    /// Submits to the backend when one is configured; any failure falls
    /// back to recording the order locally. Either way the cart is
    /// cleared, the order becomes the active one, and tracking restarts
    /// at minute zero in the mode that matches what happened (`Api` when
    /// the backend accepted the order, `Mock` otherwise).
    #[instrument(skip(self, restaurant), fields(restaurant_id = %restaurant.id))]
    pub async fn start_checkout(&mut self, restaurant: &Restaurant, fee: Decimal) -> ActiveOrder {
        let request = OrderRequest::assemble(&self.cart, &self.profile, &restaurant.id, fee);
        let now = Utc::now();

        let (mode, ack) = match self.gateway.post_json("/orders", &request).await {
            Ok(payload) => {
                let ack = decode::order_ack(&payload).ok();
                if ack.is_none() {
                    debug!("order accepted without a usable acknowledgement");
                }
                (TrackingMode::Api, ack)
            }
            Err(GatewayError::NotConfigured) => {
                debug!("no backend configured; recording order locally");
                (TrackingMode::Mock, None)
            }
            Err(err) => {
                warn!(error = %err, "order submission failed; recording order locally");
                (TrackingMode::Mock, None)
            }
        };

        let (id, created_at) = match ack {
            Some(ack) => (ack.id, ack.created_at.unwrap_or(now)),
            None => (local_order_id(), now),
        };

        let order = ActiveOrder {
            id,
            created_at,
            restaurant: restaurant.summary(),
            fee,
        };

        self.cart = Cart::cleared();
        self.persist_cart();

        self.tracking = TrackingState {
            mode,
            steps: simulated_steps(0),
            started_at: Some(now),
        };
        self.active_order = Some(order.clone());
        order
    }

    /// Pull fresh tracking for the active order; a no-op without one.
    ///
    /// A backend document wins and sets `Api` mode (steps missing from it
    /// seed the timeline at minute zero). Anything else runs the local
    /// simulation from minutes elapsed since checkout, seeding the clock
    /// if this is the first simulated refresh. Each call derives the
    /// timeline fresh, so repeated or late refreshes converge.
    #[instrument(skip(self))]
    pub async fn refresh_tracking(&mut self) {
        let Some(order) = &self.active_order else {
            return;
        };

        let path = format!("/orders/{}/tracking", urlencoding::encode(&order.id));
        let live = match self.gateway.get(&path).await {
            Ok(payload) if !payload.is_null() => Some(payload),
            Ok(_) => {
                debug!("tracking endpoint returned an empty document; simulating");
                None
            }
            Err(GatewayError::NotConfigured) => {
                debug!("no backend configured; simulating tracking");
                None
            }
            Err(err) => {
                warn!(error = %err, "tracking fetch failed; simulating");
                None
            }
        };

        match live {
            Some(payload) => {
                self.tracking.mode = TrackingMode::Api;
                self.tracking.steps = decode::tracking_steps(&payload).unwrap_or_else(|err| {
                    debug!(error = %err, "tracking document carried no steps; seeding timeline");
                    simulated_steps(0)
                });
            }
            None => {
                let started_at = *self.tracking.started_at.get_or_insert_with(Utc::now);
                let elapsed_minutes = (Utc::now() - started_at).num_minutes().max(0);
                self.tracking.mode = TrackingMode::Mock;
                self.tracking.steps = simulated_steps(elapsed_minutes);
            }
        }
    }

    /// Drop the active order and return tracking to idle. The cart and
    /// profile are untouched.
    pub fn clear_order(&mut self) {
        self.active_order = None;
        self.tracking = TrackingState::idle();
    }

    fn persist_cart(&self) {
        if let Err(err) = self.store.write(keys::CART, &self.cart) {
            warn!(error = %err, "cart not persisted");
        }
    }
}

/// Order id used when the backend gave us nothing to adopt.
fn local_order_id() -> String {
    format!("ord_{}", Uuid::new_v4().simple())
}
