//! Cached group collection.

use crate::api::ResourceClient;
use crate::types::errors::{ApiError, StoreError, ValidationError};
use crate::types::group::{Group, GroupDraft};

pub struct GroupStore {
    client: Box<dyn ResourceClient<Group>>,
    items: Vec<Group>,
}

impl GroupStore {
    pub fn new(client: Box<dyn ResourceClient<Group>>) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    fn validate(draft: &GroupDraft) -> Result<(), StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::Validation(ValidationError::EmptyField("name")));
        }
        if draft.color.trim().is_empty() {
            return Err(StoreError::Validation(ValidationError::EmptyField("color")));
        }
        Ok(())
    }

    /// Replace the cache with the backend's current state.
    pub fn fetch(&mut self) -> Result<&[Group], ApiError> {
        self.items = self.client.fetch_all()?;
        Ok(&self.items)
    }

    /// Validate and create a group, returning the stored record.
    pub fn add(&mut self, draft: GroupDraft) -> Result<Group, StoreError> {
        Self::validate(&draft)?;
        let record = self.client.create(&draft).map_err(StoreError::Api)?;
        self.items.push(record.clone());
        Ok(record)
    }

    /// Validate and update an existing group.
    pub fn update(&mut self, id: &str, draft: GroupDraft) -> Result<Group, StoreError> {
        Self::validate(&draft)?;
        let record = self.client.update(id, &draft).map_err(StoreError::Api)?;
        match self.items.iter_mut().find(|g| g.id == id) {
            Some(slot) => *slot = record.clone(),
            None => self.items.push(record.clone()),
        }
        Ok(record)
    }

    /// Delete a group and drop it from the cache.
    pub fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        self.client.delete(id)?;
        self.items.retain(|g| g.id != id);
        Ok(())
    }

    pub fn items(&self) -> &[Group] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Group> {
        self.items.iter().find(|g| g.id == id)
    }

    /// Groups of a tab, in board order.
    pub fn in_tab(&self, tab_id: &str) -> Vec<&Group> {
        let mut members: Vec<&Group> = self
            .items
            .iter()
            .filter(|g| g.tab_id.as_deref() == Some(tab_id))
            .collect();
        members.sort_by_key(|g| g.position);
        members
    }

    /// The underlying client, for bulk operations that manage their own
    /// cache resynchronization (the import apply step).
    pub fn client(&self) -> &dyn ResourceClient<Group> {
        self.client.as_ref()
    }
}
