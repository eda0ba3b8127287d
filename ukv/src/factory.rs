//! # Client Factory
//!
//! Purpose: turn a request's connection options into one live backend
//! handle for one operation.
//!
//! ## Design Principles
//! 1. **Explicit Configuration**: [`ConnectConfig`] is built once per
//!    request, defaulted, and never mutated afterwards.
//! 2. **All-or-Nothing Override**: host and port replace the defaults
//!    only together; a partial override falls back to both defaults.
//! 3. **Deterministic Test Mode**: `test` swaps in one process-wide
//!    in-memory store with cache-store semantics, so tests need no
//!    infrastructure.

use once_cell::sync::Lazy;
use tracing::debug;

use ukv_backend::{Backend, MemoryStore, RedisStore, StoreResult};
use ukv_common::Request;

/// Default cache-store host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default cache-store port.
pub const DEFAULT_PORT: u16 = 6379;

// One store per process so sequential test-mode calls observe each
// other's writes, like separate connections to one real backend.
static TEST_STORE: Lazy<MemoryStore> = Lazy::new(MemoryStore::new);

/// Connection parameters for one operation's backend handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectConfig {
    /// Backend host.
    pub host: String,
    /// Backend port.
    pub port: u16,
    /// Use the in-memory store instead of a live connection.
    pub test: bool,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        ConnectConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            test: false,
        }
    }
}

impl ConnectConfig {
    /// Derives the connection target from a request.
    ///
    /// The defaults are replaced only when the request carries both a
    /// host and a port; supplying just one of the two is ignored.
    pub fn from_request(request: &Request) -> Self {
        let mut config = ConnectConfig::default();
        if let (Some(host), Some(port)) = (request.host.as_deref(), request.port) {
            config.host = host.to_string();
            config.port = port;
        }
        config.test = request.test;
        config
    }
}

/// Opens a fresh backend handle for one operation.
pub(crate) async fn create(config: &ConnectConfig) -> StoreResult<Box<dyn Backend>> {
    if config.test {
        debug!("using in-memory test store");
        return Ok(Box::new(TEST_STORE.clone()));
    }

    let store = RedisStore::connect(&config.host, config.port).await?;
    Ok(Box::new(store))
}
