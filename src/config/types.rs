//! Runtime configuration types.

use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SCHEMA: &str = "contacts";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Where contacts are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres {
        database_url: String,
        /// Schema holding the `contacts` table.
        schema: String,
        max_connections: u32,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    /// Load demo contacts into an empty store at startup.
    pub seed: bool,
    pub max_body_bytes: usize,
}
