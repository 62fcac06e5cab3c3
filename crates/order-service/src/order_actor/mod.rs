//! # Order Actor
//!
//! The order store: a [`ResourceActor<Order>`](actor_framework::ResourceActor)
//! with UUID v4 ids.

pub mod entity;
pub mod error;

pub use entity::OrderAction;
pub use error::*;

use crate::model::{Order, OrderId};
use actor_framework::{ResourceActor, ResourceClient};
use uuid::Uuid;

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32, || OrderId(Uuid::new_v4().to_string()))
}
