//! # Order Client
//!
//! High-level API over a `ResourceClient<Order>`.
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// Persists finished orders only; pricing and stock are the workflow's job.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(OrderError::from_framework)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(OrderError::from_framework)
    }

    /// Orders placed by `user_id`, oldest first. Empty for an unknown user.
    #[instrument(skip(self))]
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders
            .into_iter()
            .filter(|order| order.user_id == user_id)
            .collect())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from_framework(e)
    }
}
