//! Restaurant catalog: live backend data when available, builtin
//! fallback data otherwise.
//!
//! Successful live reads are cached for five minutes. Fallback answers
//! are never cached, so a recovering backend takes over on the next call.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use gourmet_express_core::{CATEGORIES, MenuItem, Restaurant, decode};

use crate::fallback;
use crate::gateway::{ApiGateway, GatewayError};

/// Whether an answer came from the backend or the builtin set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSource {
    Live,
    Fallback,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live => write!(f, "live"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// A catalog answer plus where it came from, so presentation can show a
/// "live data / offline data" indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    const fn live(data: T) -> Self {
        Self {
            data,
            source: DataSource::Live,
        }
    }

    const fn fallback(data: T) -> Self {
        Self {
            data,
            source: DataSource::Fallback,
        }
    }
}

/// Cached live answers.
#[derive(Debug, Clone)]
enum CacheValue {
    Restaurants(Vec<Restaurant>),
    Restaurant(Box<Restaurant>),
    Menu(Vec<MenuItem>),
}

/// Read-side access to restaurants and menus.
///
/// Cheap to clone; clones share the gateway and the cache.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    gateway: ApiGateway,
    cache: Cache<String, CacheValue>,
}

impl Catalog {
    #[must_use]
    pub fn new(gateway: ApiGateway) -> Self {
        let cache = Cache::builder()
            .max_capacity(64)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogInner { gateway, cache }),
        }
    }

    /// Browsing categories, `All` first.
    #[must_use]
    pub const fn categories(&self) -> &'static [&'static str] {
        &CATEGORIES
    }

    /// Every restaurant available for browsing.
    ///
    /// Live data requires a non-empty, at-least-partly decodable array;
    /// anything less serves the builtin set.
    #[instrument(skip(self))]
    pub async fn restaurants(&self) -> Sourced<Vec<Restaurant>> {
        let cache_key = "restaurants".to_owned();
        if let Some(CacheValue::Restaurants(cached)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for restaurant list");
            return Sourced::live(cached);
        }

        match self.inner.gateway.get("/restaurants").await {
            Ok(Value::Array(entries)) => {
                let decoded = decode_entries(&entries, "restaurant", decode::restaurant);
                if decoded.is_empty() {
                    warn!("backend restaurant list empty or undecodable; serving fallback data");
                    return Sourced::fallback(fallback::restaurants());
                }
                self.inner
                    .cache
                    .insert(cache_key, CacheValue::Restaurants(decoded.clone()))
                    .await;
                Sourced::live(decoded)
            }
            Ok(_) => {
                warn!("backend restaurant list is not an array; serving fallback data");
                Sourced::fallback(fallback::restaurants())
            }
            Err(err) => {
                log_unavailable("restaurant list", &err);
                Sourced::fallback(fallback::restaurants())
            }
        }
    }

    /// One restaurant by id.
    ///
    /// Never empty-handed: unknown ids resolve to the builtin entry when
    /// one exists, else to a minimal placeholder record, so a deep link
    /// into checkout still works.
    #[instrument(skip(self))]
    pub async fn restaurant(&self, restaurant_id: &str) -> Sourced<Restaurant> {
        let cache_key = format!("restaurant:{restaurant_id}");
        if let Some(CacheValue::Restaurant(cached)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for restaurant");
            return Sourced::live(*cached);
        }

        let path = format!("/restaurants/{}", urlencoding::encode(restaurant_id));
        let fetched = match self.inner.gateway.get(&path).await {
            Ok(value) => match decode::restaurant(&value) {
                Ok(found) => Some(found),
                Err(err) => {
                    warn!(error = %err, "backend restaurant payload undecodable");
                    None
                }
            },
            Err(err) => {
                log_unavailable("restaurant", &err);
                None
            }
        };

        match fetched {
            Some(found) => {
                self.inner
                    .cache
                    .insert(cache_key, CacheValue::Restaurant(Box::new(found.clone())))
                    .await;
                Sourced::live(found)
            }
            None => Sourced::fallback(
                fallback::restaurant_by_id(restaurant_id)
                    .unwrap_or_else(|| fallback::placeholder(restaurant_id)),
            ),
        }
    }

    /// The menu for one restaurant.
    ///
    /// A live array is authoritative even when empty; failures serve the
    /// builtin menu (empty for unknown restaurants).
    #[instrument(skip(self))]
    pub async fn menu(&self, restaurant_id: &str) -> Sourced<Vec<MenuItem>> {
        let cache_key = format!("menu:{restaurant_id}");
        if let Some(CacheValue::Menu(cached)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for menu");
            return Sourced::live(cached);
        }

        let path = format!("/restaurants/{}/menu", urlencoding::encode(restaurant_id));
        match self.inner.gateway.get(&path).await {
            Ok(Value::Array(entries)) => {
                let decoded = decode_entries(&entries, "menu item", decode::menu_item);
                self.inner
                    .cache
                    .insert(cache_key, CacheValue::Menu(decoded.clone()))
                    .await;
                Sourced::live(decoded)
            }
            Ok(_) => {
                warn!("backend menu is not an array; serving fallback data");
                Sourced::fallback(fallback::menu(restaurant_id))
            }
            Err(err) => {
                log_unavailable("menu", &err);
                Sourced::fallback(fallback::menu(restaurant_id))
            }
        }
    }
}

/// Decode each entry, skipping the undecodable ones with a warning.
fn decode_entries<T>(
    entries: &[Value],
    entity: &'static str,
    decode_one: impl Fn(&Value) -> Result<T, decode::DecodeError>,
) -> Vec<T> {
    entries
        .iter()
        .filter_map(|entry| match decode_one(entry) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!(error = %err, "skipping undecodable {entity} entry");
                None
            }
        })
        .collect()
}

/// An unconfigured backend is routine; anything else deserves a warning.
fn log_unavailable(what: &str, err: &GatewayError) {
    match err {
        GatewayError::NotConfigured => {
            debug!("no backend configured; serving fallback {what}");
        }
        other => warn!(error = %other, "{what} fetch failed; serving fallback data"),
    }
}
