//! HTTP surface of the product service.

pub mod error;
pub mod handlers;

use crate::clients::ProductClient;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

/// Builds the route table. The client is the only shared state.
///
/// CORS is fully open: the API is called straight from browser pages served
/// on other origins.
pub fn router(products: ProductClient) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/products",
            post(handlers::create_product).get(handlers::list_products),
        )
        .route(
            "/api/products/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/api/products/:id/stock", get(handlers::get_stock))
        .route(
            "/api/products/:id/decrement-stock",
            post(handlers::decrement_stock),
        )
        .with_state(products)
        .layer(CorsLayer::permissive())
}
