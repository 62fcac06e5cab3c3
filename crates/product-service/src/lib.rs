//! # Product Service
//!
//! Product catalog and stock levels behind a JSON HTTP API (default port 3001).
//!
//! - [`model`] - `Product` and its create/update payloads.
//! - [`product_actor`] - the store: entity hooks, stock actions, errors.
//! - [`clients`] - [`ProductClient`](clients::ProductClient), the typed API over the store.
//! - [`http`] - route table and handlers.
//! - [`config`] - environment configuration.
//! - [`lifecycle`] - store startup/shutdown and the HTTP server loop.
//!
//! Stock decrements run inside the store actor, so concurrent requests for the
//! same product can never oversell it.

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
