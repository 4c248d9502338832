//! Config validation: value ranges and identifier safety.

use crate::config::{ServerConfig, StoreBackend};
use crate::error::ConfigError;

/// Lowercase SQL identifier: `[a-z_][a-z0-9_]*`, at most 63 bytes.
pub fn is_valid_schema_name(name: &str) -> bool {
    let mut chars = name.chars();
    let first_ok = chars
        .next()
        .map(|c| c.is_ascii_lowercase() || c == '_')
        .unwrap_or(false);
    first_ok
        && name.len() <= 63
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

pub fn validate(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.max_body_bytes == 0 {
        return Err(ConfigError::InvalidValue {
            key: "CONTACTS_MAX_BODY_BYTES",
            message: "must be at least 1".into(),
        });
    }
    if let StoreBackend::Postgres {
        database_url,
        schema,
        max_connections,
    } = &config.store
    {
        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_URL",
                message: "expected a postgres:// or postgresql:// URL".into(),
            });
        }
        if !is_valid_schema_name(schema) {
            return Err(ConfigError::InvalidValue {
                key: "CONTACTS_SCHEMA",
                message: format!("{:?} is not a valid schema name", schema),
            });
        }
        if *max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "CONTACTS_DB_MAX_CONNECTIONS",
                message: "must be at least 1".into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names() {
        assert!(is_valid_schema_name("contacts"));
        assert!(is_valid_schema_name("_app_2"));
        assert!(!is_valid_schema_name(""));
        assert!(!is_valid_schema_name("2fast"));
        assert!(!is_valid_schema_name("Contacts"));
        assert!(!is_valid_schema_name("x;drop"));
    }

    #[test]
    fn rejects_non_postgres_url() {
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            store: StoreBackend::Postgres {
                database_url: "mysql://localhost/x".into(),
                schema: "contacts".into(),
                max_connections: 1,
            },
            seed: false,
            max_body_bytes: 1,
        };
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DATABASE_URL", .. }));
    }
}
