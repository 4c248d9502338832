//! Contact operations used by the page loaders/actions and the JSON API.

use super::validate_mutation;
use crate::error::AppError;
use crate::model::{Contact, ContactMutation};
use crate::store::ContactStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        ContactService { store }
    }

    pub async fn list_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>, AppError> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let contacts = self.store.list(query).await?;
        tracing::debug!(query = query.unwrap_or(""), count = contacts.len(), "listed contacts");
        Ok(contacts)
    }

    pub async fn get_contact(&self, id: &str) -> Result<Contact, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("contact {}", id)))
    }

    pub async fn create_empty_contact(&self) -> Result<Contact, AppError> {
        self.create_contact(ContactMutation::default()).await
    }

    pub async fn create_contact(&self, mutation: ContactMutation) -> Result<Contact, AppError> {
        let mutation = mutation.normalized();
        validate_mutation(&mutation)?;
        let contact = self.store.create(&mutation).await?;
        tracing::info!(id = %contact.id, "contact created");
        Ok(contact)
    }

    /// Apply the fields present in `mutation`. Fails with `Validation` before touching the store.
    pub async fn update_contact(&self, id: &str, mutation: ContactMutation) -> Result<Contact, AppError> {
        let mutation = mutation.normalized();
        validate_mutation(&mutation)?;
        let contact = self
            .store
            .update(id, &mutation)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("contact {}", id)))?;
        tracing::info!(id = %contact.id, "contact updated");
        Ok(contact)
    }

    pub async fn set_favorite(&self, id: &str, favorite: bool) -> Result<Contact, AppError> {
        self.update_contact(id, ContactMutation::favorite(favorite)).await
    }

    pub async fn delete_contact(&self, id: &str) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(AppError::NotFound(format!("contact {}", id)));
        }
        tracing::info!(id = %id, "contact deleted");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }

    pub fn store_kind(&self) -> &'static str {
        self.store.kind()
    }
}
