//! Runtime settings read from the environment (a `.env` file is loaded first by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;

/// Variable holding the Postgres connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const MAX_BODY_BYTES_VAR: &str = "MAX_BODY_BYTES";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    /// `None` when unset or empty. The server still starts; exec requests then fail with 500.
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    /// Exec body limit; a larger body gets a 500 `{ "error" }` like any other body failure.
    pub max_body_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                var: BIND_ADDR_VAR,
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let max_body_bytes = match lookup(MAX_BODY_BYTES_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: MAX_BODY_BYTES_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Settings {
            database_url,
            bind_addr,
            max_body_bytes,
        })
    }
}
