//! # Actor Framework
//!
//! Building blocks for in-memory record stores that are safe to share across
//! concurrently running request handlers.
//!
//! Every store is a [`ResourceActor`]: a Tokio task that exclusively owns a
//! `HashMap` of entities and processes requests one at a time. Handlers talk to
//! it through a cheap, cloneable [`ResourceClient`]. Because the actor is the
//! only code that ever touches the map, a read-modify-write performed inside an
//! entity hook (for example a conditional stock decrement) is atomic with
//! respect to every other request reaching the same store.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the record type, its create/update DTOs,
//!    custom actions and error type.
//! 2. **Runtime** ([`ResourceActor`]) - message loop, id assignment, insertion
//!    ordered storage.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async API.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = ResourceActor::<Product>::new(32, next_product_id);
//! let handle = tokio::spawn(actor.run(()));
//!
//! let created = client.create(ProductCreate { /* ... */ }).await?;
//! let all = client.list().await?;
//!
//! // Dropping every client closes the channel; the actor then exits.
//! drop(client);
//! handle.await?;
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations so that
//! client wrappers can be unit tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
