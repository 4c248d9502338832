//! Load [`ServerConfig`] from environment variables (and `.env`, if present).

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

impl ServerConfig {
    /// Read `.env` (if any), then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::Load(format!(".env: {}", e)));
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset and blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = parse_or("CONTACTS_BIND_ADDR", get("CONTACTS_BIND_ADDR"), || {
            SocketAddr::from_str(DEFAULT_BIND_ADDR).map_err(|e| invalid("CONTACTS_BIND_ADDR", e))
        })?;

        let store = match get("DATABASE_URL") {
            Some(database_url) => StoreBackend::Postgres {
                database_url,
                schema: get("CONTACTS_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.to_string()),
                max_connections: parse_or(
                    "CONTACTS_DB_MAX_CONNECTIONS",
                    get("CONTACTS_DB_MAX_CONNECTIONS"),
                    || Ok(DEFAULT_MAX_CONNECTIONS),
                )?,
            },
            None => StoreBackend::Memory,
        };

        let seed = match get("CONTACTS_SEED") {
            Some(v) => parse_bool("CONTACTS_SEED", &v)?,
            None => true,
        };

        let max_body_bytes = parse_or("CONTACTS_MAX_BODY_BYTES", get("CONTACTS_MAX_BODY_BYTES"), || {
            Ok(DEFAULT_MAX_BODY_BYTES)
        })?;

        let config = ServerConfig {
            bind_addr,
            store,
            seed,
            max_body_bytes,
        };
        validate(&config)?;
        Ok(config)
    }
}

fn invalid(key: &'static str, e: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        message: e.to_string(),
    }
}

fn parse_or<T, D>(key: &'static str, raw: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> Result<T, ConfigError>,
{
    match raw {
        Some(v) => v.parse::<T>().map_err(|e| invalid(key, e)),
        None => default(),
    }
}

fn parse_bool(key: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, format!("expected a boolean, got {:?}", v))),
    }
}
