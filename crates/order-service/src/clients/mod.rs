//! Clients used by the order service: the local order store and the remote
//! product catalog.

pub mod order_client;
pub mod product_catalog;

pub use order_client::OrderClient;
pub use product_catalog::{CatalogProduct, HttpProductClient, ProductCatalog, RemoteError};
