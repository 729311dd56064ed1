//! Product catalog loaded at startup.
//!
//! The catalog is a JSON file describing the product cards on the listing
//! page. It is the display source only: the values a card shows are the
//! values an add-to-cart request carries, including the price as display
//! text. A card without an `id` posts an empty id and gets a synthetic one
//! minted at add time.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors loading the catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One product card on the listing page.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogProduct {
    /// Card data id. Absent ids fall back to a synthetic id per add.
    #[serde(default)]
    pub id: Option<String>,
    /// Card title text.
    pub title: String,
    /// Displayed price text, e.g. `"$19.99"`. Parsed, not trusted, at add
    /// time.
    pub price: String,
    /// Card image source path.
    pub image: String,
}

/// All product cards, in listing order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
}

impl Catalog {
    /// Build a catalog from already-loaded products.
    #[must_use]
    pub const fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    /// Unlike the cart, a broken catalog is fatal at startup: without it
    /// there is nothing to sell.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let products = serde_json::from_str(&raw)?;
        Ok(Self { products })
    }

    /// The product cards in listing order.
    #[must_use]
    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }
}
