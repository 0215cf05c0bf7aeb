use serde::{Deserialize, Serialize};

use super::Record;

/// A named, colored category of bookmarks within a tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Owning tab; groups created by an import may be unassigned.
    #[serde(default)]
    pub tab_id: Option<String>,
    /// Ordering index among the groups of the owning tab.
    #[serde(default)]
    pub position: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Client-supplied fields for creating or updating a group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupDraft {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub tab_id: Option<String>,
    #[serde(default)]
    pub position: i64,
}

impl Record for Group {
    const COLLECTION: &'static str = "groups";
    type Draft = GroupDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn materialize(id: String, draft: GroupDraft, now: i64) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            tab_id: draft.tab_id,
            position: draft.position,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_draft(&mut self, draft: GroupDraft, now: i64) {
        self.name = draft.name;
        self.color = draft.color;
        self.tab_id = draft.tab_id;
        self.position = draft.position;
        self.updated_at = now;
    }
}
