//! Decorator that retries any failed primary call against the local store.
//!
//! Makes backend failure non-fatal for every CRUD operation, at the cost
//! of silent divergence between what callers see and what the server
//! holds: a caller cannot tell "succeeded remotely" from "fell back".
//! Each fallback is logged as a warning.

use log::warn;

use super::local::LocalClient;
use super::ResourceClient;
use crate::types::errors::ApiError;
use crate::types::Record;

pub struct FallbackClient<T: Record> {
    primary: Box<dyn ResourceClient<T>>,
    substitute: LocalClient<T>,
}

impl<T: Record> FallbackClient<T> {
    pub fn new(primary: Box<dyn ResourceClient<T>>, substitute: LocalClient<T>) -> Self {
        Self { primary, substitute }
    }
}

impl<T: Record> ResourceClient<T> for FallbackClient<T> {
    fn fetch_all(&self) -> Result<Vec<T>, ApiError> {
        self.primary.fetch_all().or_else(|e| {
            warn!("{}: fetch failed ({}), serving from local store", T::COLLECTION, e);
            self.substitute.fetch_all()
        })
    }

    fn create(&self, draft: &T::Draft) -> Result<T, ApiError> {
        self.primary.create(draft).or_else(|e| {
            warn!("{}: create failed ({}), writing to local store", T::COLLECTION, e);
            self.substitute.create(draft)
        })
    }

    fn update(&self, id: &str, draft: &T::Draft) -> Result<T, ApiError> {
        self.primary.update(id, draft).or_else(|e| {
            warn!("{}: update of {} failed ({}), writing to local store", T::COLLECTION, id, e);
            self.substitute.update(id, draft)
        })
    }

    fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.primary.delete(id).or_else(|e| {
            warn!("{}: delete of {} failed ({}), deleting from local store", T::COLLECTION, id, e);
            self.substitute.delete(id)
        })
    }
}
