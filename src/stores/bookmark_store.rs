//! Cached bookmark collection.
//!
//! Mutations validate the draft (non-empty name, URL normalization) and
//! go through the client; the cache tracks the records the client
//! returns. `fetch` replaces the cache with the backend's current state.

use crate::api::ResourceClient;
use crate::services::urls;
use crate::types::bookmark::{Bookmark, BookmarkDraft};
use crate::types::errors::{ApiError, StoreError, ValidationError};

pub struct BookmarkStore {
    client: Box<dyn ResourceClient<Bookmark>>,
    items: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new(client: Box<dyn ResourceClient<Bookmark>>) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    /// Replace the cache with the backend's current state.
    pub fn fetch(&mut self) -> Result<&[Bookmark], ApiError> {
        self.items = self.client.fetch_all()?;
        Ok(&self.items)
    }

    /// Validate and create a bookmark, returning the stored record.
    ///
    /// The URL is normalized before submission: bare hosts get an https
    /// scheme, unparseable input is rejected without a client call.
    pub fn add(&mut self, mut draft: BookmarkDraft) -> Result<Bookmark, StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::Validation(ValidationError::EmptyField("name")));
        }
        draft.url = urls::normalize_url(&draft.url).map_err(StoreError::Validation)?;

        let record = self.client.create(&draft).map_err(StoreError::Api)?;
        self.items.push(record.clone());
        Ok(record)
    }

    /// Validate and update an existing bookmark.
    pub fn update(&mut self, id: &str, mut draft: BookmarkDraft) -> Result<Bookmark, StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::Validation(ValidationError::EmptyField("name")));
        }
        draft.url = urls::normalize_url(&draft.url).map_err(StoreError::Validation)?;

        let record = self.client.update(id, &draft).map_err(StoreError::Api)?;
        match self.items.iter_mut().find(|b| b.id == id) {
            Some(slot) => *slot = record.clone(),
            None => self.items.push(record.clone()),
        }
        Ok(record)
    }

    /// Delete a bookmark and drop it from the cache.
    pub fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        self.client.delete(id)?;
        self.items.retain(|b| b.id != id);
        Ok(())
    }

    pub fn items(&self) -> &[Bookmark] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Bookmark> {
        self.items.iter().find(|b| b.id == id)
    }

    /// Bookmarks visible in a tab.
    pub fn in_tab(&self, tab_id: &str) -> Vec<&Bookmark> {
        self.items
            .iter()
            .filter(|b| b.tab_ids.iter().any(|t| t == tab_id))
            .collect()
    }

    /// Bookmarks of a group, in per-group order. Unpositioned bookmarks
    /// sort last.
    pub fn in_group(&self, group_id: &str) -> Vec<&Bookmark> {
        let mut members: Vec<&Bookmark> = self
            .items
            .iter()
            .filter(|b| b.group_ids.iter().any(|g| g == group_id))
            .collect();
        members.sort_by_key(|b| b.position.unwrap_or(i64::MAX));
        members
    }

    /// The underlying client, for bulk operations that manage their own
    /// cache resynchronization (the import apply step).
    pub fn client(&self) -> &dyn ResourceClient<Bookmark> {
        self.client.as_ref()
    }
}
