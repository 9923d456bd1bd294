//! Device-local durable storage for ordering state.
//!
//! One JSON file per key under the configured data directory - the
//! device-scoped key/value store the cart and profile persist into.
//! Reads are tolerant by contract: a missing, unreadable, or malformed
//! record yields `None` and the caller starts from canonical defaults.
//! Writes are best-effort; callers decide whether a failed write is worth
//! more than a warning.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

/// Storage keys for ordering state.
pub mod keys {
    /// Key for the persisted cart record.
    pub const CART: &str = "cart_v1";

    /// Key for the persisted delivery profile.
    pub const PROFILE: &str = "profile_v1";
}

/// Errors raised by storage writes. Reads never fail; they degrade.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not serialize record {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not write record {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// JSON-file-backed key/value store rooted at one directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first write, so constructing a store never touches the disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read and decode the record under `key`.
    ///
    /// Returns `None` when the record is absent or cannot be decoded; a
    /// malformed record is logged and discarded rather than surfaced.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(key, error = %err, "could not read stored record");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(key, error = %err, "discarding malformed stored record");
                None
            }
        }
    }

    /// Write `record` under `key`, creating the root directory on demand.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the record cannot be serialized or
    /// the file cannot be written.
    pub fn write<T: Serialize>(&self, key: &str, record: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            key: key.to_owned(),
            source,
        })?;

        let raw = serde_json::to_string_pretty(record).map_err(|source| StorageError::Serialize {
            key: key.to_owned(),
            source,
        })?;

        fs::write(self.path_for(key), raw).map_err(|source| StorageError::Io {
            key: key.to_owned(),
            source,
        })?;
        debug!(key, "stored record");
        Ok(())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use gourmet_express_core::{Cart, MenuItem, Profile};
    use rust_decimal::Decimal;

    fn sample_cart() -> Cart {
        let item = MenuItem {
            id: "m1".to_owned(),
            name: "Margherita".to_owned(),
            desc: String::new(),
            price: Decimal::new(1250, 2),
        };
        Cart::cleared().with_line(&item, "r1")
    }

    #[test]
    fn test_round_trips_cart_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        let cart = sample_cart();
        store.write(keys::CART, &cart).unwrap();

        let loaded: Cart = store.read(keys::CART).unwrap();
        assert_eq!(loaded, cart);
    }

    #[test]
    fn test_missing_record_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        assert_eq!(store.read::<Cart>(keys::CART), None);
    }

    #[test]
    fn test_malformed_record_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        fs::write(dir.path().join("cart_v1.json"), "{not json").unwrap();

        assert_eq!(store.read::<Cart>(keys::CART), None);
    }

    #[test]
    fn test_partial_profile_record_takes_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        fs::write(
            dir.path().join("profile_v1.json"),
            r#"{"city": "Portside"}"#,
        )
        .unwrap();

        let profile: Profile = store.read(keys::PROFILE).unwrap();
        assert_eq!(profile.city, "Portside");
        assert_eq!(profile.name, "Alex");
    }

    #[test]
    fn test_write_creates_root_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("nested").join("state"));

        store.write(keys::PROFILE, &Profile::default()).unwrap();
        assert!(store.read::<Profile>(keys::PROFILE).is_some());
    }
}
