//! Error types for orders: the store and the creation workflow.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The product service does not know the referenced product.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    /// The product service refused the decrement (stock changed since the read).
    #[error("Insufficient stock or product not found: {0}")]
    StockDecrementRejected(String),

    /// Network failure or unexpected answer from the product service.
    #[error("Failed to process product {product_id}: {message}")]
    RemoteCall { product_id: String, message: String },

    #[error("Invalid order: {0}")]
    Validation(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Translates a framework error, recovering entity errors raised by the actor.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e.into_entity_error::<OrderError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
