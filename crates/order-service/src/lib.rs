//! # Order Service
//!
//! Orders behind a JSON HTTP API (default port 3002). Placing an order prices
//! and reserves every line against the product service over HTTP before the
//! order is stored.
//!
//! - [`model`] - `Order`, its items, status and payloads.
//! - [`order_actor`] - the order store and `OrderError`.
//! - [`clients`] - [`OrderClient`](clients::OrderClient) for the store and the
//!   [`ProductCatalog`](clients::ProductCatalog) seam for the product service.
//! - [`workflow`] - [`OrderWorkflow`](workflow::OrderWorkflow), the creation saga.
//! - [`http`] - route table and handlers.
//! - [`config`] - environment configuration.
//! - [`lifecycle`] - store startup/shutdown and the HTTP server loop.

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod workflow;
