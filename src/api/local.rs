//! Local storage backend: one JSON-array blob per resource type.
//!
//! Plays the backend's role when no server is reachable: assigns UUID
//! ids and timestamps on create. A missing blob reads as an empty
//! collection; writes serialize the full collection and rewrite the blob.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use super::ResourceClient;
use crate::types::errors::ApiError;
use crate::types::Record;

pub struct LocalClient<T: Record> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Record> LocalClient<T> {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{}.json", T::COLLECTION)),
            _marker: PhantomData,
        }
    }

    /// Path of the blob backing this collection.
    pub fn blob_path(&self) -> &Path {
        &self.path
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn load(&self) -> Result<Vec<T>, ApiError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| ApiError::Io(format!("failed to read {}: {}", self.path.display(), e)))?;
        serde_json::from_str(&content).map_err(|e| {
            ApiError::Serialization(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, records: &[T]) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ApiError::Io(format!("failed to create {}: {}", parent.display(), e)))?;
        }
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| ApiError::Io(format!("failed to write {}: {}", self.path.display(), e)))
    }
}

impl<T: Record> ResourceClient<T> for LocalClient<T> {
    fn fetch_all(&self) -> Result<Vec<T>, ApiError> {
        self.load()
    }

    fn create(&self, draft: &T::Draft) -> Result<T, ApiError> {
        let mut records = self.load()?;
        let record = T::materialize(Uuid::new_v4().to_string(), draft.clone(), Self::now());
        records.push(record.clone());
        self.save(&records)?;
        Ok(record)
    }

    fn update(&self, id: &str, draft: &T::Draft) -> Result<T, ApiError> {
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        record.apply_draft(draft.clone(), Self::now());
        let updated = record.clone();
        self.save(&records)?;
        Ok(updated)
    }

    fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(ApiError::NotFound(id.to_string()));
        }
        self.save(&records)
    }
}
