//! App Core for linkboard.
//!
//! Central struct holding the stores and the import session.

use crate::api;
use crate::config::ClientConfig;
use crate::services::importer::ImportSession;
use crate::stores::bookmark_store::BookmarkStore;
use crate::stores::group_store::GroupStore;
use crate::stores::tab_store::TabStore;

/// Central application struct wiring the stores to the configured
/// client layer.
pub struct App {
    pub config: ClientConfig,
    pub tabs: TabStore,
    pub groups: GroupStore,
    pub bookmarks: BookmarkStore,
    pub import: ImportSession,
}

impl App {
    /// Build stores against the configured backend.
    pub fn new(config: ClientConfig) -> Self {
        let tabs = TabStore::new(api::client_for(&config));
        let groups = GroupStore::new(api::client_for(&config));
        let bookmarks = BookmarkStore::new(api::client_for(&config));
        Self {
            config,
            tabs,
            groups,
            bookmarks,
            import: ImportSession::new(),
        }
    }

    /// Prefetch all collections. Failures are tolerated; the affected
    /// caches simply stay empty until the next fetch.
    pub fn startup(&mut self) {
        let _ = self.tabs.fetch();
        let _ = self.groups.fetch();
        let _ = self.bookmarks.fetch();
    }
}
