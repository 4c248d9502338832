//! Contact record store: the trait every back-end implements, plus the back-ends.

mod memory;
mod postgres;
mod seed;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, PgStore};
pub use seed::seed_contacts;

use crate::error::AppError;
use crate::model::{Contact, ContactMutation};
use async_trait::async_trait;

/// Keyed contact storage. Ids are allocated by the store on [`ContactStore::create`].
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts matching `query` (all of them when `None` or blank), ordered by last name
    /// then creation time.
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, AppError>;

    async fn get(&self, id: &str) -> Result<Option<Contact>, AppError>;

    /// Allocate a new record with default fields, then apply `mutation` over it.
    async fn create(&self, mutation: &ContactMutation) -> Result<Contact, AppError>;

    /// Returns the updated record, or None when `id` is unknown.
    async fn update(&self, id: &str, mutation: &ContactMutation) -> Result<Option<Contact>, AppError>;

    /// Returns true when a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Short back-end name for diagnostics ("memory", "postgres").
    fn kind(&self) -> &'static str;

    /// Readiness probe.
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
