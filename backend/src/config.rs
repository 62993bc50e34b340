//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `INQUIRY_*` environment variables, and config
//! files. Accessors apply defaults and validate values that would otherwise
//! fail later at bind or lookup time.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings rejected at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `bind_addr` does not parse as `host:port`.
    #[error("bind address `{value}` is not a socket address")]
    BindAddr { value: String },
    /// A zero lookup timeout would fail every lookup.
    #[error("lookup timeout must be greater than zero")]
    ZeroTimeout,
    /// A pool of zero connections can never serve a checkout.
    #[error("pool size must be greater than zero")]
    ZeroPoolSize,
}

/// Configuration for the inquiry server and the lookup CLI.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "INQUIRY")]
pub struct InquirySettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. When unset the fixture store is used.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Upper bound on a single store lookup, in milliseconds.
    #[ortho_config(default = 5000)]
    pub lookup_timeout_ms: u64,
    /// JSON seed file for the fixture store.
    pub seed_path: Option<PathBuf>,
}

impl InquirySettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|_| SettingsError::BindAddr {
            value: value.to_owned(),
        })
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size {
            0 => Err(SettingsError::ZeroPoolSize),
            size => Ok(size),
        }
    }

    /// Lookup timeout; zero is rejected so every lookup has a deadline.
    pub fn lookup_timeout(&self) -> Result<Duration, SettingsError> {
        match self.lookup_timeout_ms {
            0 => Err(SettingsError::ZeroTimeout),
            millis => Ok(Duration::from_millis(millis)),
        }
    }

    pub fn seed_path(&self) -> Option<&std::path::Path> {
        self.seed_path.as_deref()
    }
}
