use serde::{Deserialize, Serialize};

use super::Record;

/// A top-level workspace partition scoping visible bookmarks and groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Client-supplied fields for creating or updating a tab.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabDraft {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl Record for Tab {
    const COLLECTION: &'static str = "tabs";
    type Draft = TabDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn materialize(id: String, draft: TabDraft, now: i64) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_draft(&mut self, draft: TabDraft, now: i64) {
        self.name = draft.name;
        self.color = draft.color;
        self.updated_at = now;
    }
}
