//! Runtime configuration, read once from the environment at startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `ORDER_SERVICE_HOST` | `0.0.0.0` |
//! | `ORDER_SERVICE_PORT` | `3002` |
//! | `PRODUCT_SERVICE_URL` | `http://localhost:3001` |

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_PRODUCT_SERVICE_URL: &str = "http://localhost:3001";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderServiceConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the product service.
    pub product_service_url: String,
}

impl Default for OrderServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            product_service_url: DEFAULT_PRODUCT_SERVICE_URL.to_string(),
        }
    }
}

impl OrderServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("ORDER_SERVICE_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("ORDER_SERVICE_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "ORDER_SERVICE_PORT",
                expected: "a port number",
                value: port.clone(),
            })?;
        }
        if let Some(url) = lookup("PRODUCT_SERVICE_URL") {
            match Url::parse(&url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
                    config.product_service_url = url
                }
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "PRODUCT_SERVICE_URL",
                        expected: "an http(s) URL",
                        value: url,
                    })
                }
            }
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
