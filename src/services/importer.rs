//! Import pipeline: validation, confirmation, destructive apply.
//!
//! An import replaces the board. Validation is synchronous and stops at
//! the first violation; the apply step deletes everything, recreates the
//! staged records, and rebuilds group references from the positional
//! indices carried by the file.

use std::collections::HashMap;

use log::warn;
use serde_json::Value;

use crate::stores::bookmark_store::BookmarkStore;
use crate::stores::group_store::GroupStore;
use crate::types::bookmark::BookmarkDraft;
use crate::types::errors::{ApplyError, ImportError};
use crate::types::group::GroupDraft;

/// A validated import file, staged for apply.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedImport {
    pub groups: Vec<StagedGroup>,
    pub bookmarks: Vec<StagedBookmark>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagedGroup {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagedBookmark {
    pub name: String,
    pub url: String,
    /// Positions into the staged groups list.
    pub group_indices: Vec<usize>,
}

/// Counts shown on the confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub bookmarks: usize,
    pub groups: usize,
}

/// Outcome of an apply run.
///
/// `skipped` counts per-record delete/create failures that were logged
/// and passed over; a nonzero value means a partial import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportReport {
    pub groups_created: usize,
    pub bookmarks_created: usize,
    pub skipped: usize,
}

fn string_field(entry: &Value, field: &str) -> Option<String> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Lenient reading of `groupIds`: non-negative integers and numeric
/// strings (legacy files) are positions, everything else is dropped.
fn group_indices(entry: &Value) -> Vec<usize> {
    let Some(raw) = entry.get("groupIds").and_then(Value::as_array) else {
        return Vec::new();
    };
    raw.iter()
        .filter_map(|value| match value {
            Value::Number(n) => n.as_u64().map(|n| n as usize),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|n| usize::try_from(n).ok()),
            _ => None,
        })
        .collect()
}

/// Structural validation of an import file.
///
/// The first violation aborts with an error naming the offending field
/// or array index. Malformed `groupIds` entries are not violations;
/// they are dropped.
pub fn parse_payload(text: &str) -> Result<StagedImport, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(|e| ImportError::Parse(e.to_string()))?;

    let top = value
        .as_object()
        .ok_or_else(|| ImportError::Format("top level is not an object".to_string()))?;

    let groups_raw = top
        .get("groups")
        .and_then(Value::as_array)
        .ok_or_else(|| ImportError::Format("'groups' is missing or not an array".to_string()))?;
    let bookmarks_raw = top
        .get("bookmarks")
        .and_then(Value::as_array)
        .ok_or_else(|| ImportError::Format("'bookmarks' is missing or not an array".to_string()))?;

    let mut groups = Vec::with_capacity(groups_raw.len());
    for (index, entry) in groups_raw.iter().enumerate() {
        let name =
            string_field(entry, "name").ok_or(ImportError::Group { index, field: "name" })?;
        let color =
            string_field(entry, "color").ok_or(ImportError::Group { index, field: "color" })?;
        groups.push(StagedGroup { name, color });
    }

    let mut bookmarks = Vec::with_capacity(bookmarks_raw.len());
    for (index, entry) in bookmarks_raw.iter().enumerate() {
        let name =
            string_field(entry, "name").ok_or(ImportError::Bookmark { index, field: "name" })?;
        let url =
            string_field(entry, "url").ok_or(ImportError::Bookmark { index, field: "url" })?;
        bookmarks.push(StagedBookmark {
            name,
            url,
            group_indices: group_indices(entry),
        });
    }

    Ok(StagedImport { groups, bookmarks })
}

/// Phases of the import dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportState {
    Idle,
    Confirming,
    Applying,
}

/// Drives an import from file text to applied records.
///
/// `Idle` → `stage` → `Confirming` → `apply` → `Idle`; `cancel` resets
/// staged data from either pre-apply state so the same file can be
/// selected again.
pub struct ImportSession {
    state: ImportState,
    staged: Option<StagedImport>,
}

impl ImportSession {
    pub fn new() -> Self {
        Self {
            state: ImportState::Idle,
            staged: None,
        }
    }

    pub fn state(&self) -> ImportState {
        self.state
    }

    /// Staged counts, present while confirming.
    pub fn summary(&self) -> Option<ImportSummary> {
        self.staged.as_ref().map(|staged| ImportSummary {
            bookmarks: staged.bookmarks.len(),
            groups: staged.groups.len(),
        })
    }

    /// Validate `text` and stage it for confirmation.
    ///
    /// A validation failure leaves the session in `Idle` with nothing
    /// staged.
    pub fn stage(&mut self, text: &str) -> Result<ImportSummary, ImportError> {
        match parse_payload(text) {
            Ok(staged) => {
                let summary = ImportSummary {
                    bookmarks: staged.bookmarks.len(),
                    groups: staged.groups.len(),
                };
                self.staged = Some(staged);
                self.state = ImportState::Confirming;
                Ok(summary)
            }
            Err(e) => {
                self.staged = None;
                self.state = ImportState::Idle;
                Err(e)
            }
        }
    }

    /// Drop staged data and return to `Idle`.
    pub fn cancel(&mut self) {
        self.staged = None;
        self.state = ImportState::Idle;
    }

    /// Destructively replace both collections with the staged data.
    ///
    /// Not transactional. In order: delete every existing bookmark,
    /// delete every existing group, create the staged groups recording
    /// positional index → new id, create the staged bookmarks with group
    /// references translated through that map (unresolved indices are
    /// dropped), then refetch both stores. Per-record delete/create
    /// failures are logged, counted in the report and skipped; a
    /// partial import is an accepted outcome. Only the final refetch
    /// fails the call; the session ends in `Idle` either way.
    pub fn apply(
        &mut self,
        bookmarks: &mut BookmarkStore,
        groups: &mut GroupStore,
        target_tab: Option<&str>,
    ) -> Result<ImportReport, ApplyError> {
        let staged = match (self.state, self.staged.take()) {
            (ImportState::Confirming, Some(staged)) => staged,
            _ => {
                self.state = ImportState::Idle;
                return Err(ApplyError::NothingStaged);
            }
        };
        self.state = ImportState::Applying;

        let mut report = ImportReport::default();

        for bookmark in bookmarks.items().to_vec() {
            if let Err(e) = bookmarks.client().delete(&bookmark.id) {
                warn!("import: failed to delete bookmark {}: {}", bookmark.id, e);
                report.skipped += 1;
            }
        }
        for group in groups.items().to_vec() {
            if let Err(e) = groups.client().delete(&group.id) {
                warn!("import: failed to delete group {}: {}", group.id, e);
                report.skipped += 1;
            }
        }

        let mut id_for_index: HashMap<usize, String> = HashMap::new();
        for (index, staged_group) in staged.groups.iter().enumerate() {
            let draft = GroupDraft {
                name: staged_group.name.clone(),
                color: staged_group.color.clone(),
                tab_id: target_tab.map(str::to_string),
                position: index as i64,
            };
            match groups.client().create(&draft) {
                Ok(created) => {
                    id_for_index.insert(index, created.id);
                    report.groups_created += 1;
                }
                Err(e) => {
                    warn!("import: failed to create group '{}': {}", staged_group.name, e);
                    report.skipped += 1;
                }
            }
        }

        for staged_bookmark in &staged.bookmarks {
            let group_ids: Vec<String> = staged_bookmark
                .group_indices
                .iter()
                .filter_map(|index| id_for_index.get(index).cloned())
                .collect();
            let draft = BookmarkDraft {
                name: staged_bookmark.name.clone(),
                url: staged_bookmark.url.clone(),
                tab_ids: target_tab.map(str::to_string).into_iter().collect(),
                group_ids,
                position: None,
            };
            match bookmarks.client().create(&draft) {
                Ok(_) => report.bookmarks_created += 1,
                Err(e) => {
                    warn!(
                        "import: failed to create bookmark '{}': {}",
                        staged_bookmark.name, e
                    );
                    report.skipped += 1;
                }
            }
        }

        self.state = ImportState::Idle;
        bookmarks.fetch().map_err(ApplyError::Resync)?;
        groups.fetch().map_err(ApplyError::Resync)?;
        Ok(report)
    }
}

impl Default for ImportSession {
    fn default() -> Self {
        Self::new()
    }
}
