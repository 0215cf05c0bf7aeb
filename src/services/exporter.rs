//! Export pipeline: position-addressed snapshots of the board.
//!
//! The export format carries no persisted ids. Groups are written as an
//! ordered `{name, color}` list and bookmarks reference them by array
//! index, so a file survives re-import into a backend that assigns
//! fresh ids.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::types::bookmark::Bookmark;
use crate::types::errors::ExportError;
use crate::types::export::{ExportPayload, ExportedBookmark, ExportedGroup};
use crate::types::group::Group;

/// Build the portable snapshot for the given collections.
///
/// Group references are rewritten from ids to positions in `groups`;
/// references to groups absent from the slice are dropped.
pub fn build_payload(bookmarks: &[Bookmark], groups: &[Group]) -> ExportPayload {
    let index_of: HashMap<&str, usize> = groups
        .iter()
        .enumerate()
        .map(|(index, group)| (group.id.as_str(), index))
        .collect();

    let exported_groups = groups
        .iter()
        .map(|group| ExportedGroup {
            name: group.name.clone(),
            color: group.color.clone(),
        })
        .collect();

    let exported_bookmarks = bookmarks
        .iter()
        .map(|bookmark| {
            let indices: Vec<usize> = bookmark
                .group_ids
                .iter()
                .filter_map(|id| index_of.get(id.as_str()).copied())
                .collect();
            ExportedBookmark {
                name: bookmark.name.clone(),
                url: bookmark.url.clone(),
                group_ids: if indices.is_empty() { None } else { Some(indices) },
            }
        })
        .collect();

    ExportPayload {
        bookmarks: exported_bookmarks,
        groups: exported_groups,
    }
}

/// File name for an export created on `date`, e.g.
/// `bookmarks-export-2026-08-07.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("bookmarks-export-{}.json", date.format("%Y-%m-%d"))
}

/// Serialize and write a dated export file into `dir`, returning its path.
///
/// The payload is serialized before the file is created: a failing
/// serialization produces an error and no partial file.
pub fn write_export(
    dir: &Path,
    bookmarks: &[Bookmark],
    groups: &[Group],
) -> Result<PathBuf, ExportError> {
    let payload = build_payload(bookmarks, groups);
    let json = serde_json::to_string_pretty(&payload)
        .map_err(|e| ExportError::Serialization(e.to_string()))?;

    fs::create_dir_all(dir)
        .map_err(|e| ExportError::Io(format!("failed to create {}: {}", dir.display(), e)))?;
    let path = dir.join(export_file_name(chrono::Local::now().date_naive()));
    fs::write(&path, json)
        .map_err(|e| ExportError::Io(format!("failed to write {}: {}", path.display(), e)))?;
    Ok(path)
}
