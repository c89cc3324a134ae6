//! Environment-driven configuration with local-development defaults.

use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite URL, e.g. `sqlite://warehouse.db`. The file is created if missing.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Cap on request body size, enforced across all routes.
    pub body_limit_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: "sqlite://warehouse.db".into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_connections: 5,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Reads `DATABASE_URL`, `BIND_ADDR`, and `DB_MAX_CONNECTIONS`, falling
    /// back to defaults when unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or(defaults.database_url);
        let bind_addr = std::env::var("BIND_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.bind_addr);
        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_connections);
        AppConfig {
            database_url,
            bind_addr,
            max_connections,
            body_limit_bytes: defaults.body_limit_bytes,
        }
    }
}
