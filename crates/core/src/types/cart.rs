//! The cart sequence and its entries.
//!
//! A [`Cart`] is an ordered list of [`CartItem`]s, unique by product id.
//! Adding an id that is already present increments its quantity instead of
//! appending a duplicate; driving a quantity to zero or below removes the
//! entry entirely. All operations here are pure list manipulation -
//! persistence and rendering are the callers' concern.

use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

/// One entry in the cart: a product plus how many of it.
///
/// Field order matches the persisted JSON layout
/// `[{id, name, price, image, quantity}, ...]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    /// Always >= 1 while the item exists; items never sit at quantity zero.
    pub quantity: u32,
}

impl CartItem {
    /// Per-item subtotal: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Ordered, id-unique sequence of cart entries.
///
/// Serializes transparently as a bare JSON array, which is the persisted
/// storage layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a product to the cart.
    ///
    /// If an entry with the same id exists, its quantity is incremented by
    /// one and the stored name/price/image are kept (first write wins).
    /// Otherwise the product is appended with quantity 1.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                id: product.id,
                name: product.name,
                price: product.price,
                image: product.image,
                quantity: 1,
            });
        }
    }

    /// Remove the entry with the given id. Absent ids are a silent no-op.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
    }

    /// Set the quantity of the entry with the given id.
    ///
    /// A quantity of zero or below removes the entry. Values beyond
    /// `u32::MAX` saturate; there is no upper bound otherwise. Absent ids
    /// are a silent no-op.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Total number of units across all entries (the badge number).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of per-item subtotals. Formatting is a view concern.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
