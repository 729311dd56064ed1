//! Product descriptor for add-to-cart requests.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// The fields a product card contributes when it is added to the cart.
///
/// None of these fields are validated. The name, price, and image are taken
/// straight from the card markup; a price that failed to parse arrives here
/// as `f64::NAN` and is stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique id per distinct product.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price, currency-agnostic.
    pub price: f64,
    /// Display image URL or path.
    pub image: String,
}
