//! ActorEntity trait implementation for the Order domain type.
//!
//! The hooks only touch the order itself. Stock checks and remote calls live
//! in the [`OrderWorkflow`](crate::workflow::OrderWorkflow), outside the actor
//! loop, so a slow product service never stalls the order store.

use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Orders have no custom actions.
#[derive(Debug, Clone)]
pub enum OrderAction {}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(address) = update.shipping_address {
            self.shipping_address = address;
        }
        self.touch();
        Ok(())
    }

    async fn handle_action(&mut self, action: OrderAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
