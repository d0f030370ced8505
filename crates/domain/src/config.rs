//! Service configuration loaded from the environment.
//!
//! Variables are read once at startup (the binary loads `.env` via `dotenvy`
//! before calling [`Config::from_env`]):
//! - `SYSSENTRY_BIND` - socket address to listen on (default `127.0.0.1:8000`)
//! - `SYSSENTRY_DB_PATH` - path to the SQLite sink database; unset disables
//!   the durable sink entirely

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::{Result, SysSentryError};

/// Default listen address, matching the original dashboard port.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Runtime configuration for the SysSentry service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP surface binds to.
    pub bind_addr: SocketAddr,
    /// SQLite database path for the durable sink; `None` runs in-memory only.
    pub database_path: Option<PathBuf>,
}

impl Config {
    /// Build a configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        let bind_raw =
            std::env::var("SYSSENTRY_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|err| {
            SysSentryError::Config(format!("invalid SYSSENTRY_BIND `{bind_raw}`: {err}"))
        })?;

        let database_path = std::env::var("SYSSENTRY_DB_PATH").ok().map(PathBuf::from);

        Ok(Self { bind_addr, database_path })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)), database_path: None }
    }
}
