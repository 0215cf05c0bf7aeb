use linkboard::api::local::LocalClient;
use linkboard::stores::bookmark_store::BookmarkStore;
use linkboard::types::bookmark::BookmarkDraft;
use linkboard::types::errors::{StoreError, ValidationError};

fn store(dir: &tempfile::TempDir) -> BookmarkStore {
    BookmarkStore::new(Box::new(LocalClient::new(dir.path())))
}

fn draft(name: &str, url: &str) -> BookmarkDraft {
    BookmarkDraft {
        name: name.to_string(),
        url: url.to_string(),
        ..BookmarkDraft::default()
    }
}

#[test]
fn test_add_normalizes_bare_host() {
    let dir = tempfile::tempdir().unwrap();
    let mut bookmarks = store(&dir);

    let created = bookmarks.add(draft("Test", "example.com")).unwrap();
    assert_eq!(created.url, "https://example.com");
    assert_eq!(bookmarks.items().len(), 1);
}

#[test]
fn test_add_keeps_explicit_scheme() {
    let dir = tempfile::tempdir().unwrap();
    let mut bookmarks = store(&dir);

    let created = bookmarks.add(draft("Test", "http://example.com")).unwrap();
    assert_eq!(created.url, "http://example.com");
}

#[test]
fn test_add_rejects_empty_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut bookmarks = store(&dir);

    let result = bookmarks.add(draft("   ", "https://example.com"));
    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::EmptyField("name")))
    ));
    // Nothing was sent to the client.
    assert!(bookmarks.items().is_empty());
    assert!(bookmarks.client().fetch_all().unwrap().is_empty());
}

#[test]
fn test_add_rejects_invalid_url_before_submission() {
    let dir = tempfile::tempdir().unwrap();
    let mut bookmarks = store(&dir);

    let result = bookmarks.add(draft("Test", "://invalid-url"));
    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::InvalidUrl(_)))
    ));
    assert!(bookmarks.client().fetch_all().unwrap().is_empty());
}

#[test]
fn test_fetch_sees_other_instances() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = store(&dir);
    writer.add(draft("Test", "https://example.com")).unwrap();

    let mut reader = store(&dir);
    assert!(reader.items().is_empty());
    reader.fetch().unwrap();
    assert_eq!(reader.items().len(), 1);
    assert_eq!(reader.items()[0].name, "Test");
}

#[test]
fn test_update_replaces_cached_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut bookmarks = store(&dir);

    let created = bookmarks.add(draft("Old", "https://example.com")).unwrap();
    let updated = bookmarks
        .update(&created.id, draft("New", "new.example.com"))
        .unwrap();

    assert_eq!(updated.url, "https://new.example.com");
    assert_eq!(bookmarks.items().len(), 1);
    assert_eq!(bookmarks.get(&created.id).unwrap().name, "New");
}

#[test]
fn test_remove_drops_from_cache() {
    let dir = tempfile::tempdir().unwrap();
    let mut bookmarks = store(&dir);

    let created = bookmarks.add(draft("Test", "https://example.com")).unwrap();
    bookmarks.remove(&created.id).unwrap();
    assert!(bookmarks.items().is_empty());
    assert!(bookmarks.get(&created.id).is_none());
}

#[test]
fn test_in_tab_filters_membership() {
    let dir = tempfile::tempdir().unwrap();
    let mut bookmarks = store(&dir);

    bookmarks
        .add(BookmarkDraft {
            tab_ids: vec!["tab-1".to_string()],
            ..draft("In tab", "https://a.example.com")
        })
        .unwrap();
    bookmarks.add(draft("No tab", "https://b.example.com")).unwrap();

    let visible = bookmarks.in_tab("tab-1");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "In tab");
}

#[test]
fn test_in_group_orders_by_position() {
    let dir = tempfile::tempdir().unwrap();
    let mut bookmarks = store(&dir);

    bookmarks
        .add(BookmarkDraft {
            group_ids: vec!["g-1".to_string()],
            position: Some(2),
            ..draft("Second", "https://b.example.com")
        })
        .unwrap();
    bookmarks
        .add(BookmarkDraft {
            group_ids: vec!["g-1".to_string()],
            position: Some(1),
            ..draft("First", "https://a.example.com")
        })
        .unwrap();
    bookmarks
        .add(BookmarkDraft {
            group_ids: vec!["g-1".to_string()],
            position: None,
            ..draft("Unpositioned", "https://c.example.com")
        })
        .unwrap();

    let ordered: Vec<&str> = bookmarks
        .in_group("g-1")
        .iter()
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(ordered, vec!["First", "Second", "Unpositioned"]);
}
