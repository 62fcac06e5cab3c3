//! HTTP surface of the order service.

pub mod error;
pub mod handlers;

use crate::clients::OrderClient;
use crate::workflow::OrderWorkflow;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
    pub workflow: OrderWorkflow,
}

/// Builds the route table, open to cross-origin browser calls.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/api/orders/user/:user_id", get(handlers::list_user_orders))
        .route(
            "/api/orders/:id",
            get(handlers::get_order)
                .put(handlers::update_order)
                .delete(handlers::delete_order),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
}
