//! Page-level rendering tests: health, product listing, empty cart state.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;

use sundry_integration_tests::{app, body_text, get};

#[tokio::test]
async fn health_returns_ok() {
    let router = app();

    let response = get(&router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn home_renders_a_card_per_catalog_product() {
    let router = app();

    let page = body_text(get(&router, "/").await).await;
    assert!(page.contains("Stoneware Mug"));
    assert!(page.contains("Beeswax Candle"));
    assert!(page.contains("Seasonal Surprise Box"));
    assert_eq!(page.matches("class=\"product-card\"").count(), 3);
    assert_eq!(page.matches(">Add to Cart<").count(), 3);
}

#[tokio::test]
async fn card_without_catalog_id_posts_a_blank_id() {
    let router = app();

    let page = body_text(get(&router, "/").await).await;
    assert!(page.contains(r#"data-product-id="mug-01""#));
    // The id-less card still renders the hidden field, just empty.
    assert!(page.contains(r#"name="product_id" value="""#));
}

#[tokio::test]
async fn cards_carry_the_displayed_price_text_in_the_form() {
    let router = app();

    let page = body_text(get(&router, "/").await).await;
    assert!(page.contains(r#"name="price" value="$14.00""#));
}

#[tokio::test]
async fn empty_cart_page_shows_placeholder_and_zero_total() {
    let router = app();

    let page = body_text(get(&router, "/cart").await).await;
    assert!(page.contains("Your cart is empty."));
    assert!(page.contains(r#"<span id="cart-total">0.00</span>"#));
}

#[tokio::test]
async fn count_badge_starts_at_zero() {
    let router = app();

    let response = get(&router, "/cart/count").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await.trim(), "0");
}
