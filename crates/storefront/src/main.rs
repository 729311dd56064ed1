//! Sundry Storefront - small self-hosted shop.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for interactivity
//! - Askama templates for server-side rendering
//! - Product cards from a static JSON catalog
//! - Cart persisted in a file-backed key-value store under one key
//!
//! The cart is loaded once at startup and mirrored back to storage on
//! every mutation. Another process writing the same store directory is
//! not coordinated with; last writer wins.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sundry_core::CartStore;
use sundry_storefront::catalog::Catalog;
use sundry_storefront::config::StorefrontConfig;
use sundry_storefront::routes;
use sundry_storefront::state::AppState;
use sundry_storefront::storage::FileStorage;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sundry_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Load the product catalog; without it there is nothing to sell
    let catalog = Catalog::load(&config.catalog_path).expect("Failed to load product catalog");
    tracing::info!("Catalog loaded: {} products", catalog.products().len());

    // Open the cart store. Missing or malformed stored data degrades to an
    // empty cart inside `open`; only the storage path is decided here.
    let storage = FileStorage::new(config.data_dir.clone());
    let cart = CartStore::open(Box::new(storage));
    tracing::info!("Cart store opened: {} items", cart.cart().item_count());

    // Build application state
    let state = AppState::new(config.clone(), catalog, cart);

    // Build router
    let app = Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
