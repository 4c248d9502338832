//! Contacts: a server-rendered CRUD contacts book (list, view, create, edit, favorite, delete)
//! with a JSON API over the same store.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod search;
pub mod service;
pub mod state;
pub mod store;
pub mod views;

pub use config::{ServerConfig, StoreBackend};
pub use error::{ApiError, AppError, ConfigError};
pub use model::{Contact, ContactMutation};
pub use routes::{app, AppOptions};
pub use service::ContactService;
pub use state::AppState;
pub use store::{ensure_database_exists, ContactStore, MemoryStore, PgStore};
