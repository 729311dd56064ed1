//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation goes through the shared `CartStore` and responds with a
//! freshly rebuilt fragment; the `HX-Trigger: cart-updated` header tells
//! the count badge to refresh itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use sundry_core::{Cart, Product, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u64,
}

// =============================================================================
// Type Conversions
// =============================================================================

/// Format an amount to two decimal places.
///
/// `NaN` formats as `"NaN"`, matching what a stored unparsable price
/// renders as everywhere else.
fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    id: item.id.to_string(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    price: format_amount(item.price),
                    line_price: format_amount(item.line_total()),
                    image: item.image.clone(),
                })
                .collect(),
            total: format_amount(cart.total()),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Card Field Parsing
// =============================================================================

/// Extract a price from the displayed price text of a product card.
///
/// Keeps only the characters `0-9`, `.`, and `-` before parsing, so
/// `"$1,299.99"` parses as `1299.99`. Text with no parsable remainder
/// yields `NaN`, which is stored as-is: the cart does not validate prices.
fn parse_price_text(text: &str) -> f64 {
    let numeric: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    numeric.parse().unwrap_or(f64::NAN)
}

/// Resolve the posted card id, minting a synthetic timestamp id when the
/// card carried none.
///
/// A card without a real data id mints a new logical product per click;
/// cards that need stable identity across adds must carry an id.
fn resolve_product_id(posted: Option<String>) -> ProductId {
    match posted.filter(|id| !id.trim().is_empty()) {
        Some(id) => ProductId::new(id),
        None => ProductId::synthetic(chrono::Utc::now().timestamp_millis()),
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data: the card's markup-level field values.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    /// Card data id; empty or absent when the card has none.
    pub product_id: Option<String>,
    pub name: String,
    /// Displayed price text, e.g. `"$19.99"`.
    pub price: String,
    pub image: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    /// Free-text quantity from the numeric input.
    pub quantity: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Add-to-cart confirmation notice fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/add_notice.html")]
pub struct AddNoticeTemplate {
    pub name: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let cart = CartView::from(state.cart().cart());
    CartShowTemplate { cart }
}

/// Add item to cart (HTMX).
///
/// Builds the product descriptor from the posted card fields - unvalidated,
/// exactly as the card displayed them - and responds with a confirmation
/// notice naming the product.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product = Product {
        id: resolve_product_id(form.product_id),
        name: form.name.clone(),
        price: parse_price_text(&form.price),
        image: form.image,
    };

    state.cart().add(product)?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        AddNoticeTemplate { name: form.name },
    )
        .into_response())
}

/// Update cart item quantity (HTMX).
///
/// The quantity arrives as free text. Non-numeric input is rejected and
/// the cart is left untouched; a parsed quantity of zero or below removes
/// the item. Unknown ids are a no-op that still returns the rebuilt
/// fragment.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let quantity: i64 = form
        .quantity
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("quantity must be a whole number".to_string()))?;

    let cart = {
        let mut store = state.cart();
        store.set_quantity(&ProductId::new(form.product_id), quantity)?;
        CartView::from(store.cart())
    };

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response())
}

/// Remove item from cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let cart = {
        let mut store = state.cart();
        store.remove(&ProductId::new(form.product_id))?;
        CartView::from(store.cart())
    };

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let count = state.cart().cart().item_count();
    CartCountTemplate { count }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn price_text_strips_currency_markup() {
        assert!((parse_price_text("$19.99") - 19.99).abs() < f64::EPSILON);
        assert!((parse_price_text("Price: $9.99") - 9.99).abs() < f64::EPSILON);
        assert!((parse_price_text("$1,299.50") - 1299.50).abs() < f64::EPSILON);
    }

    #[test]
    fn price_text_keeps_sign() {
        assert!((parse_price_text("-$5.00") - (-5.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn unparsable_price_text_yields_nan() {
        assert!(parse_price_text("free!").is_nan());
        assert!(parse_price_text("").is_nan());
    }

    #[test]
    fn amounts_format_to_two_decimals() {
        assert_eq!(format_amount(9.99), "9.99");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(19.98), "19.98");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }

    #[test]
    fn posted_id_is_used_when_present() {
        let id = resolve_product_id(Some("widget-1".to_string()));
        assert_eq!(id.as_str(), "widget-1");
    }

    #[test]
    fn empty_posted_id_mints_synthetic() {
        let id = resolve_product_id(Some(String::new()));
        assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn empty_cart_view_has_zero_total() {
        let view = CartView::from(&Cart::new());
        assert_eq!(view.total, "0.00");
        assert_eq!(view.item_count, 0);
        assert!(view.items.is_empty());
    }

    #[test]
    fn cart_view_formats_line_totals() {
        let mut cart = Cart::new();
        cart.add(Product {
            id: ProductId::new("a"),
            name: "Widget".to_string(),
            price: 9.99,
            image: "x.png".to_string(),
        });
        cart.add(Product {
            id: ProductId::new("a"),
            name: "Widget".to_string(),
            price: 9.99,
            image: "x.png".to_string(),
        });

        let view = CartView::from(&cart);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].price, "9.99");
        assert_eq!(view.items[0].line_price, "19.98");
        assert_eq!(view.total, "19.98");
        assert_eq!(view.item_count, 2);
    }
}
