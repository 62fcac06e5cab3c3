//! ActorEntity trait implementation for the Product domain type.
//!
//! Includes the stock actions used cross-service by the order workflow.

use super::actions::{ProductAction, ProductActionResult};
use super::error::{validate_price, ProductError};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        validate_price(params.price)?;
        Ok(Self::new(
            id,
            params.name,
            params.description,
            params.price,
            params.quantity,
        ))
    }

    /// Applies every field present in the update and bumps `updated_at`.
    /// A rejected update changes nothing.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            validate_price(price)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        self.touch();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::GetStock => Ok(ProductActionResult::Stock(self.quantity)),
            ProductAction::DecrementStock(0) => Err(ProductError::InvalidQuantity(0)),
            ProductAction::DecrementStock(requested) => {
                if self.quantity < requested {
                    debug!(product_id = %self.id, requested, available = self.quantity, "Decrement refused");
                    return Ok(ProductActionResult::Decremented(false));
                }
                self.quantity -= requested;
                self.touch();
                Ok(ProductActionResult::Decremented(true))
            }
        }
    }
}
