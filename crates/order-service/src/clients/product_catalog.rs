//! # Product Catalog
//!
//! The order workflow's view of the product service. [`ProductCatalog`] is
//! the seam: production uses [`HttpProductClient`], tests plug in a fake.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Failures talking to the product service.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("invalid product service URL {0}")]
    InvalidBaseUrl(String),

    #[error("request to product service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("product service answered {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

/// The fields of a remote product the workflow needs. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,
    pub price: f64,
    pub quantity: u32,
}

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// `Ok(None)` when the product does not exist.
    async fn get_product(&self, product_id: &str) -> Result<Option<CatalogProduct>, RemoteError>;

    /// `Ok(false)` when the product service refuses the decrement.
    async fn decrement_stock(&self, product_id: &str, quantity: u32) -> Result<bool, RemoteError>;
}

/// [`ProductCatalog`] over the product service's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpProductClient {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpProductClient {
    pub fn new(base_url: &str) -> Result<Self, RemoteError> {
        let base_url =
            Url::parse(base_url).map_err(|_| RemoteError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::InvalidBaseUrl(base_url.to_string()));
        }
        let http = reqwest::Client::builder().build()?;
        Ok(Self { base_url, http })
    }

    /// `{base}/api/products/{id}[/{action}]`, with the id percent-encoded as a
    /// single path segment.
    ///
    /// `None` for `.` and `..`: URL normalisation would turn them into a
    /// different path, so no product can be addressed by them.
    fn product_url(&self, product_id: &str, action: Option<&str>) -> Option<Url> {
        if matches!(product_id, "." | "..") {
            return None;
        }
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "products", product_id]);
            if let Some(action) = action {
                segments.push(action);
            }
        }
        Some(url)
    }
}

async fn unexpected(response: reqwest::Response) -> RemoteError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    RemoteError::UnexpectedStatus { status, body }
}

#[async_trait]
impl ProductCatalog for HttpProductClient {
    #[instrument(skip(self))]
    async fn get_product(&self, product_id: &str) -> Result<Option<CatalogProduct>, RemoteError> {
        let Some(url) = self.product_url(product_id, None) else {
            debug!("Id is not addressable, treating as unknown");
            return Ok(None);
        };
        let response = self.http.get(url).send().await?;
        debug!(status = %response.status(), "Product lookup answered");

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            _ => Err(unexpected(response).await),
        }
    }

    #[instrument(skip(self))]
    async fn decrement_stock(&self, product_id: &str, quantity: u32) -> Result<bool, RemoteError> {
        let Some(url) = self.product_url(product_id, Some("decrement-stock")) else {
            debug!("Id is not addressable, refusing decrement");
            return Ok(false);
        };
        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "quantity": quantity }))
            .send()
            .await?;
        debug!(status = %response.status(), "Decrement answered");

        match response.status() {
            StatusCode::BAD_REQUEST => Ok(false),
            status if status.is_success() => Ok(true),
            _ => Err(unexpected(response).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_under_the_base() {
        let client = HttpProductClient::new("http://localhost:3001").unwrap();
        assert_eq!(
            client.product_url("7", None).unwrap().as_str(),
            "http://localhost:3001/api/products/7"
        );
        assert_eq!(
            client.product_url("7", Some("decrement-stock")).unwrap().as_str(),
            "http://localhost:3001/api/products/7/decrement-stock"
        );
    }

    #[test]
    fn base_path_and_trailing_slash_are_kept() {
        let client = HttpProductClient::new("http://catalog.internal/v1/").unwrap();
        assert_eq!(
            client.product_url("7", None).unwrap().as_str(),
            "http://catalog.internal/v1/api/products/7"
        );
    }

    #[test]
    fn ids_cannot_escape_their_segment() {
        let client = HttpProductClient::new("http://localhost:3001").unwrap();
        assert_eq!(
            client.product_url("../admin", None).unwrap().as_str(),
            "http://localhost:3001/api/products/..%2Fadmin"
        );
    }

    #[test]
    fn dot_segments_are_not_addressable() {
        let client = HttpProductClient::new("http://localhost:3001/v1").unwrap();
        for id in [".", ".."] {
            assert_eq!(client.product_url(id, None), None);
            assert_eq!(client.product_url(id, Some("decrement-stock")), None);
        }
        assert_eq!(
            client.product_url("...", None).unwrap().as_str(),
            "http://localhost:3001/v1/api/products/..."
        );
    }

    #[tokio::test]
    async fn dot_segment_ids_are_unknown_without_a_request() {
        // Nothing listens here, so any request would be a transport error.
        let client = HttpProductClient::new("http://127.0.0.1:9").unwrap();
        for id in [".", ".."] {
            assert_eq!(client.get_product(id).await.unwrap(), None);
            assert!(!client.decrement_stock(id, 1).await.unwrap());
        }
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            HttpProductClient::new("not a url"),
            Err(RemoteError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpProductClient::new("mailto:ops@example.com"),
            Err(RemoteError::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        // Port 9 (discard) is not expected to have an HTTP listener.
        let client = HttpProductClient::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(
            client.get_product("1").await,
            Err(RemoteError::Transport(_))
        ));
    }
}
