//! Error types for the Product actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A decrement was refused: too few units, or no such product.
    #[error("Insufficient stock or product not found: {0}")]
    StockUnavailable(String),

    /// A stock change of zero units.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// A field failed validation (negative price, malformed body, ...).
    #[error("Invalid product: {0}")]
    Validation(String),

    /// The store actor is unavailable.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    /// Translates a framework error, recovering entity errors raised by the actor.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e.into_entity_error::<ProductError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// Rejects prices that are negative, NaN or infinite.
pub fn validate_price(price: f64) -> Result<(), ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(ProductError::Validation(format!(
            "price must be a non-negative number, got {price}"
        )))
    }
}
