//! Server configuration read from the environment.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const BIND_ENV: &str = "PETS_BIND";
pub const LOG_ENV: &str = "PETS_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PETS_BIND '{value}'")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var(BIND_ENV).ok(), env::var(LOG_ENV).ok())
    }

    pub fn from_vars(bind: Option<String>, log_filter: Option<String>) -> Result<Self, ConfigError> {
        let raw = bind
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = raw
            .parse()
            .map_err(|source| ConfigError::InvalidBind { value: raw, source })?;

        Ok(Self {
            bind_addr,
            log_filter: log_filter.filter(|value| !value.trim().is_empty()),
        })
    }
}
