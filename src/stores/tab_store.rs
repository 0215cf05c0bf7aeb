//! Cached tab collection.

use crate::api::ResourceClient;
use crate::types::errors::{ApiError, StoreError, ValidationError};
use crate::types::tab::{Tab, TabDraft};

pub struct TabStore {
    client: Box<dyn ResourceClient<Tab>>,
    items: Vec<Tab>,
}

impl TabStore {
    pub fn new(client: Box<dyn ResourceClient<Tab>>) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    /// Replace the cache with the backend's current state.
    pub fn fetch(&mut self) -> Result<&[Tab], ApiError> {
        self.items = self.client.fetch_all()?;
        Ok(&self.items)
    }

    /// Validate and create a tab, returning the stored record.
    pub fn add(&mut self, draft: TabDraft) -> Result<Tab, StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::Validation(ValidationError::EmptyField("name")));
        }
        let record = self.client.create(&draft).map_err(StoreError::Api)?;
        self.items.push(record.clone());
        Ok(record)
    }

    /// Validate and update an existing tab.
    pub fn update(&mut self, id: &str, draft: TabDraft) -> Result<Tab, StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::Validation(ValidationError::EmptyField("name")));
        }
        let record = self.client.update(id, &draft).map_err(StoreError::Api)?;
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(slot) => *slot = record.clone(),
            None => self.items.push(record.clone()),
        }
        Ok(record)
    }

    /// Delete a tab and drop it from the cache.
    ///
    /// Groups and bookmarks referencing the tab keep their references;
    /// the backend owns cleanup.
    pub fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        self.client.delete(id)?;
        self.items.retain(|t| t.id != id);
        Ok(())
    }

    pub fn items(&self) -> &[Tab] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Tab> {
        self.items.iter().find(|t| t.id == id)
    }
}
