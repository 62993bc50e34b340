//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use customer_inquiry::domain::DEFAULT_LOOKUP_TIMEOUT;
use customer_inquiry::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) lookup_timeout: Duration,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Configuration binding to `bind_addr` with the default lookup timeout
    /// and an empty fixture store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            db_pool: None,
            seed_path: None,
        }
    }

    #[must_use]
    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    /// Serve lookups from PostgreSQL. Takes precedence over a seed file.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Seed the fixture store from a JSON file when no pool is attached.
    #[must_use]
    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(path.into());
        self
    }
}
