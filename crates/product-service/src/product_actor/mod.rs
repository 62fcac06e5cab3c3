//! # Product Actor
//!
//! The product store: a [`ResourceActor<Product>`](actor_framework::ResourceActor)
//! plus the stock actions.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] / [`ProductActionResult`]
//!
//! ```rust,ignore
//! let (actor, generic_client) = product_actor::new();
//! tokio::spawn(actor.run(()));
//! let products = ProductClient::new(generic_client);
//!
//! let laptop = products.create_product(params).await?;
//! assert!(products.decrement_stock(laptop.id.clone(), 2).await?);
//! ```

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::{Product, ProductId};
use actor_framework::{ResourceActor, ResourceClient};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Product actor and its client.
///
/// Ids are sequential decimal strings starting at `"1"`.
pub fn new() -> (ResourceActor<Product>, ResourceClient<Product>) {
    let product_id_counter = Arc::new(AtomicU64::new(1));
    let next_product_id = move || {
        let id = product_id_counter.fetch_add(1, Ordering::SeqCst);
        ProductId(id.to_string())
    };

    ResourceActor::new(32, next_product_id)
}
