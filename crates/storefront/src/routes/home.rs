//! Home page route handler: the product listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog::CatalogProduct;
use crate::filters;
use crate::state::AppState;

/// Product card display data for templates.
///
/// The card renders exactly the values its add-to-cart form will post:
/// the id attribute (empty when the catalog entry has none), the title
/// text, the displayed price text, and the image source.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub title: String,
    pub price: String,
    pub image: String,
}

impl From<&CatalogProduct> for ProductCardView {
    fn from(product: &CatalogProduct) -> Self {
        Self {
            id: product.id.clone().unwrap_or_default(),
            title: product.title.clone(),
            price: product.price.clone(),
            image: product.image.clone(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCardView>,
}

/// Display the product listing page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let products = state
        .catalog()
        .products()
        .iter()
        .map(ProductCardView::from)
        .collect();

    HomeTemplate { products }
}
