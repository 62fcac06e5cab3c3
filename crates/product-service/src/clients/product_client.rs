//! # Product Client
//!
//! High-level API over a `ResourceClient<Product>`. HTTP handlers and the
//! startup seeding go through this type rather than talking to the actor.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from_framework(e)
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(ProductError::from_framework)
    }

    /// Applies a partial update. Unknown ids yield [`ProductError::NotFound`].
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(ProductError::from_framework)
    }

    /// Current stock level. An unknown product has a stock of 0.
    #[instrument(skip(self))]
    pub async fn get_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        match self.inner.perform_action(id, ProductAction::GetStock).await {
            Ok(ProductActionResult::Stock(level)) => Ok(level),
            Ok(other) => Err(ProductError::ActorCommunicationError(format!(
                "unexpected result for GetStock: {other:?}"
            ))),
            Err(FrameworkError::NotFound(_)) => Ok(0),
            Err(e) => Err(ProductError::from_framework(e)),
        }
    }

    /// Removes `quantity` units if that many are in stock.
    ///
    /// Returns `Ok(false)` when the product is unknown or holds fewer units;
    /// nothing is changed in that case.
    #[instrument(skip(self))]
    pub async fn decrement_stock(&self, id: ProductId, quantity: u32) -> Result<bool, ProductError> {
        debug!("Decrementing {} units", quantity);
        match self
            .inner
            .perform_action(id, ProductAction::DecrementStock(quantity))
            .await
        {
            Ok(ProductActionResult::Decremented(done)) => Ok(done),
            Ok(other) => Err(ProductError::ActorCommunicationError(format!(
                "unexpected result for DecrementStock: {other:?}"
            ))),
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(ProductError::from_framework(e)),
        }
    }
}
