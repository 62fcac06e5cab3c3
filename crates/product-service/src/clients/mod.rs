//! Type-safe clients over the product store.

pub mod product_client;

pub use product_client::ProductClient;
