use serde::{Deserialize, Serialize};

use super::Record;

/// A saved bookmark.
///
/// Tab and group membership are plain id lists; the backend owns
/// referential integrity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub tab_ids: Vec<String>,
    #[serde(default)]
    pub group_ids: Vec<String>,
    /// Ordering index among the bookmarks of a group.
    #[serde(default)]
    pub position: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Client-supplied fields for creating or updating a bookmark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookmarkDraft {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub tab_ids: Vec<String>,
    #[serde(default)]
    pub group_ids: Vec<String>,
    #[serde(default)]
    pub position: Option<i64>,
}

impl Record for Bookmark {
    const COLLECTION: &'static str = "bookmarks";
    type Draft = BookmarkDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn materialize(id: String, draft: BookmarkDraft, now: i64) -> Self {
        Self {
            id,
            name: draft.name,
            url: draft.url,
            tab_ids: draft.tab_ids,
            group_ids: draft.group_ids,
            position: draft.position,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_draft(&mut self, draft: BookmarkDraft, now: i64) {
        self.name = draft.name;
        self.url = draft.url;
        self.tab_ids = draft.tab_ids;
        self.group_ids = draft.group_ids;
        self.position = draft.position;
        self.updated_at = now;
    }
}
