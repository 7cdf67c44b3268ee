//! Centralized configuration (environment variables + defaults).

use anyhow::{anyhow, bail, Context};
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which storage engine backs the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Volatile, in-process store.
    Memory,
    Postgres {
        database_url: String,
        max_connections: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Reads configuration from the process environment (after `.env`, if any).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    ///
    /// - `BIND_ADDR`: listen address (default `0.0.0.0:3000`)
    /// - `CATALOG_STORE`: `memory` (default) or `postgres`
    /// - `DATABASE_URL`: required when `CATALOG_STORE=postgres`
    /// - `DATABASE_MAX_CONNECTIONS`: pool size (default 5)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw
            .parse()
            .with_context(|| format!("BIND_ADDR must be a socket address, got '{}'", bind_raw))?;

        let backend = lookup("CATALOG_STORE").unwrap_or_else(|| "memory".to_string());
        let store = match backend.trim().to_lowercase().as_str() {
            "memory" => StoreConfig::Memory,
            "postgres" => {
                let database_url = lookup("DATABASE_URL")
                    .filter(|v| !v.trim().is_empty())
                    .ok_or_else(|| {
                        anyhow!("DATABASE_URL must be set when CATALOG_STORE=postgres")
                    })?;
                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(v) => v
                        .parse::<u32>()
                        .context("DATABASE_MAX_CONNECTIONS must be a valid u32")?
                        .max(1),
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                StoreConfig::Postgres {
                    database_url,
                    max_connections,
                }
            }
            other => bail!("CATALOG_STORE must be 'memory' or 'postgres', got '{}'", other),
        };

        Ok(Self { bind_addr, store })
    }
}
