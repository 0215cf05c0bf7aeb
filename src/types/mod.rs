// linkboard shared type definitions
// Each submodule defines types used across the application.

pub mod bookmark;
pub mod errors;
pub mod export;
pub mod group;
pub mod tab;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Behavior shared by every backend-managed record type.
///
/// `COLLECTION` names both the REST collection and the local storage
/// blob. Drafts carry the client-supplied fields of a record; identity
/// and timestamps are assigned by whoever persists it, either the
/// backend or the local client playing the backend's role.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const COLLECTION: &'static str;
    type Draft: Clone + Serialize;

    fn id(&self) -> &str;

    /// Build a full record from a draft with a fresh identity.
    fn materialize(id: String, draft: Self::Draft, now: i64) -> Self;

    /// Overwrite the draft-carried fields of an existing record.
    fn apply_draft(&mut self, draft: Self::Draft, now: i64);
}
