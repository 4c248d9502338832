//! In-process store. Contents are lost on restart.

use super::{seed_contacts, ContactStore};
use crate::error::AppError;
use crate::model::{Contact, ContactMutation};
use crate::search::filter_and_sort;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    contacts: RwLock<HashMap<String, Contact>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the demo contacts.
    pub fn seeded() -> Self {
        Self::with_contacts(seed_contacts())
    }

    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let map = contacts.into_iter().map(|c| (c.id.clone(), c)).collect();
        MemoryStore {
            contacts: RwLock::new(map),
        }
    }

    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, AppError> {
        let snapshot: Vec<Contact> = self.contacts.read().await.values().cloned().collect();
        Ok(filter_and_sort(snapshot, query))
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, AppError> {
        Ok(self.contacts.read().await.get(id).cloned())
    }

    async fn create(&self, mutation: &ContactMutation) -> Result<Contact, AppError> {
        let mut contact = Contact::new_empty();
        contact.apply(mutation);
        let mut map = self.contacts.write().await;
        // v4 collisions are not expected; refuse rather than overwrite.
        if map.contains_key(&contact.id) {
            return Err(AppError::BadRequest(format!("duplicate contact id: {}", contact.id)));
        }
        map.insert(contact.id.clone(), contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &str, mutation: &ContactMutation) -> Result<Option<Contact>, AppError> {
        let mut map = self.contacts.write().await;
        Ok(map.get_mut(id).map(|contact| {
            contact.apply(mutation);
            contact.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.contacts.write().await.remove(id).is_some())
    }
}
