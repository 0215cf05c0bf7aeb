use serde::{Deserialize, Serialize};

/// Portable snapshot of the board.
///
/// Group references are positional indices into `groups`, not persisted
/// ids: ids are regenerated on import, array positions survive the trip.
/// An index is meaningful only within the file that carries it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportPayload {
    pub bookmarks: Vec<ExportedBookmark>,
    pub groups: Vec<ExportedGroup>,
}

/// A bookmark as written to an export file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportedBookmark {
    pub name: String,
    pub url: String,
    /// Indices into the exported groups list; omitted when empty.
    #[serde(rename = "groupIds", skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<usize>>,
}

/// A group as written to an export file: identity-free.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportedGroup {
    pub name: String,
    pub color: String,
}
