//! The cart store: in-memory cart mirrored into a storage backend.
//!
//! The store is loaded once at startup and every mutation immediately
//! re-serializes the full cart back to storage - no batching, no dirty
//! tracking. Missing or malformed stored data degrades silently to an
//! empty cart; nothing is surfaced to the user beyond a log line.

use crate::storage::{Storage, StorageError};
use crate::types::{Cart, Product, ProductId};

/// The storage key the serialized cart lives under.
pub const CART_KEY: &str = "cart";

/// Owns the in-memory cart sequence and the storage backend it mirrors to.
///
/// The UI layer holds exactly one of these and routes every mutation
/// through it, so the stored value and the in-memory sequence only diverge
/// when another process writes the same backend (last writer wins).
pub struct CartStore {
    cart: Cart,
    storage: Box<dyn Storage>,
}

impl CartStore {
    /// Load the cart from storage.
    ///
    /// A missing key, an unreadable backend, or malformed stored JSON all
    /// initialize an empty cart. No error is returned: the persisted
    /// format carries no version, so there is nothing to migrate and
    /// nothing useful to report beyond a warning.
    #[must_use]
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let cart = match storage.get(CART_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("stored cart is malformed, starting empty: {e}");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!("failed to read stored cart, starting empty: {e}");
                Cart::new()
            }
        };

        Self { cart, storage }
    }

    /// Read access to the current cart sequence.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a product (increment on repeat id) and persist.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting fails. The in-memory
    /// mutation is kept either way.
    pub fn add(&mut self, product: Product) -> Result<(), StorageError> {
        self.cart.add(product);
        self.persist()
    }

    /// Remove an entry (no-op on absent id) and persist.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting fails.
    pub fn remove(&mut self, id: &ProductId) -> Result<(), StorageError> {
        self.cart.remove(id);
        self.persist()
    }

    /// Set an entry's quantity (<= 0 removes it) and persist.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting fails.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), StorageError> {
        self.cart.set_quantity(id, quantity);
        self.persist()
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.cart)?;
        self.storage.set(CART_KEY, &raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::storage::MemoryStorage;

    /// Storage whose entries stay visible to the test after the store
    /// takes ownership of its handle.
    #[derive(Clone, Default)]
    struct SharedStorage {
        entries: Arc<Mutex<HashMap<String, String>>>,
    }

    impl SharedStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }
    }

    impl Storage for SharedStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.read(key))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price,
            image: format!("{id}.png"),
        }
    }

    #[test]
    fn open_with_empty_storage_starts_empty() {
        let store = CartStore::open(Box::new(MemoryStorage::new()));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn open_with_malformed_value_starts_empty() {
        let storage = MemoryStorage::with_entries([(
            CART_KEY.to_string(),
            "{not json".to_string(),
        )]);
        let store = CartStore::open(Box::new(storage));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn open_with_wrong_shape_starts_empty() {
        // Valid JSON, wrong shape: an object where an array is expected.
        let storage = MemoryStorage::with_entries([(
            CART_KEY.to_string(),
            r#"{"id":"a"}"#.to_string(),
        )]);
        let store = CartStore::open(Box::new(storage));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn every_mutation_persists_immediately() {
        let storage = SharedStorage::default();
        let mut store = CartStore::open(Box::new(storage.clone()));

        store.add(product("a", 9.99)).unwrap();
        assert!(storage.read(CART_KEY).unwrap().contains("\"a\""));

        store.add(product("b", 1.00)).unwrap();
        assert!(storage.read(CART_KEY).unwrap().contains("\"b\""));

        store.set_quantity(&ProductId::new("a"), 3).unwrap();
        assert!(storage.read(CART_KEY).unwrap().contains("\"quantity\":3"));

        store.remove(&ProductId::new("b")).unwrap();
        assert!(!storage.read(CART_KEY).unwrap().contains("\"b\""));
    }

    #[test]
    fn persist_reload_round_trip_preserves_order() {
        let storage = SharedStorage::default();
        {
            let mut store = CartStore::open(Box::new(storage.clone()));
            store.add(product("z", 3.0)).unwrap();
            store.add(product("a", 1.0)).unwrap();
            store.add(product("z", 3.0)).unwrap();
        }

        let reopened = CartStore::open(Box::new(storage));
        let ids: Vec<&str> = reopened
            .cart()
            .items()
            .iter()
            .map(|i| i.id.as_str())
            .collect();

        assert_eq!(ids, ["z", "a"]);
        assert_eq!(reopened.cart().items()[0].quantity, 2);
    }
}
