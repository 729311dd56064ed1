//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SUNDRY_HOST` - Bind address (default: 127.0.0.1)
//! - `SUNDRY_PORT` - Listen port (default: 3000)
//! - `SUNDRY_DATA_DIR` - Directory for the key-value store (default: data)
//! - `SUNDRY_CATALOG` - Path to the product catalog JSON
//!   (default: crates/storefront/content/catalog.json)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_CATALOG_PATH: &str = "crates/storefront/content/catalog.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Root directory of the file-backed key-value store
    pub data_dir: PathBuf,
    /// Path to the product catalog JSON file
    pub catalog_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SUNDRY_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SUNDRY_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SUNDRY_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SUNDRY_PORT".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("SUNDRY_DATA_DIR", "data"));
        let catalog_path = PathBuf::from(get_env_or_default("SUNDRY_CATALOG", DEFAULT_CATALOG_PATH));

        Ok(Self {
            host,
            port,
            data_dir,
            catalog_path,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
