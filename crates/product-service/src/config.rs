//! Runtime configuration, read once from the environment at startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `PRODUCT_SERVICE_HOST` | `0.0.0.0` |
//! | `PRODUCT_SERVICE_PORT` | `3001` |
//! | `PRODUCT_SERVICE_SEED` | `true` |

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;

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
pub struct ProductServiceConfig {
    pub host: String,
    pub port: u16,
    /// Load the demo catalog on startup.
    pub seed: bool,
}

impl Default for ProductServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            seed: true,
        }
    }
}

impl ProductServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset keys keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("PRODUCT_SERVICE_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PRODUCT_SERVICE_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PRODUCT_SERVICE_PORT",
                expected: "a port number",
                value: port.clone(),
            })?;
        }
        if let Some(seed) = lookup("PRODUCT_SERVICE_SEED") {
            config.seed = match seed.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "PRODUCT_SERVICE_SEED",
                        expected: "true or false",
                        value: seed,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
