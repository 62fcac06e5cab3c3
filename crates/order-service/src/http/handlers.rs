//! Request handlers for the order routes.

use super::AppState;
use crate::model::{CreateOrderRequest, Order, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use actor_framework::ActorClient;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Acknowledgement for deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
    pub id: OrderId,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "order-service" }))
}

/// Runs the creation workflow. Any abort answers 400 and stores nothing.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), OrderError> {
    let Json(request) = payload?;
    let order = state.workflow.place_order(request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, OrderError> {
    Ok(Json(state.orders.list().await?))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, OrderError> {
    state
        .orders
        .get(OrderId(id.clone()))
        .await?
        .map(Json)
        .ok_or(OrderError::NotFound(id))
}

pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Order>>, OrderError> {
    Ok(Json(state.orders.find_by_user_id(&user_id).await?))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<OrderUpdate>, JsonRejection>,
) -> Result<Json<Order>, OrderError> {
    let Json(update) = payload?;
    Ok(Json(state.orders.update_order(OrderId(id), update).await?))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, OrderError> {
    let id = OrderId(id);
    state.orders.delete(id.clone()).await?;
    info!(order_id = %id, "Order deleted");
    Ok(Json(Ack {
        message: "Order deleted successfully".to_string(),
        id,
    }))
}
