//! Request handlers for the product routes.
//!
//! Handlers are thin: decode the request, call [`ProductClient`], encode the
//! answer. Every failure goes out through `ProductError`'s `IntoResponse`.

use crate::clients::ProductClient;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use actor_framework::ActorClient;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Body of `POST /api/products/:id/decrement-stock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecrementStockRequest {
    pub quantity: u32,
}

/// Body of `GET /api/products/:id/stock`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub id: ProductId,
    pub stock: u32,
}

/// Acknowledgement for deletes and decrements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
    pub id: ProductId,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "product-service" }))
}

pub async fn create_product(
    State(products): State<ProductClient>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ProductError> {
    let Json(params) = payload?;
    let product = products.create_product(params).await?;
    info!(product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(
    State(products): State<ProductClient>,
) -> Result<Json<Vec<Product>>, ProductError> {
    Ok(Json(products.list().await?))
}

pub async fn get_product(
    State(products): State<ProductClient>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ProductError> {
    products
        .get(ProductId(id.clone()))
        .await?
        .map(Json)
        .ok_or(ProductError::NotFound(id))
}

pub async fn update_product(
    State(products): State<ProductClient>,
    Path(id): Path<String>,
    payload: Result<Json<ProductUpdate>, JsonRejection>,
) -> Result<Json<Product>, ProductError> {
    let Json(update) = payload?;
    Ok(Json(products.update_product(ProductId(id), update).await?))
}

pub async fn delete_product(
    State(products): State<ProductClient>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, ProductError> {
    let id = ProductId(id);
    products.delete(id.clone()).await?;
    info!(product_id = %id, "Product deleted");
    Ok(Json(Ack {
        message: "Product deleted successfully".to_string(),
        id,
    }))
}

pub async fn get_stock(
    State(products): State<ProductClient>,
    Path(id): Path<String>,
) -> Result<Json<StockLevel>, ProductError> {
    let id = ProductId(id);
    let stock = products.get_stock(id.clone()).await?;
    Ok(Json(StockLevel { id, stock }))
}

/// Answers 400 when the product is unknown or holds too few units.
pub async fn decrement_stock(
    State(products): State<ProductClient>,
    Path(id): Path<String>,
    payload: Result<Json<DecrementStockRequest>, JsonRejection>,
) -> Result<Json<Ack>, ProductError> {
    let Json(DecrementStockRequest { quantity }) = payload?;
    let id = ProductId(id);
    if !products.decrement_stock(id.clone(), quantity).await? {
        return Err(ProductError::StockUnavailable(id.0));
    }
    Ok(Json(Ack {
        message: "Stock decremented successfully".to_string(),
        id,
    }))
}
