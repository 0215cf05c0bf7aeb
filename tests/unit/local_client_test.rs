use linkboard::api::local::LocalClient;
use linkboard::api::ResourceClient;
use linkboard::types::bookmark::{Bookmark, BookmarkDraft};
use linkboard::types::errors::ApiError;
use linkboard::types::group::{Group, GroupDraft};

fn bookmark_draft(name: &str, url: &str) -> BookmarkDraft {
    BookmarkDraft {
        name: name.to_string(),
        url: url.to_string(),
        ..BookmarkDraft::default()
    }
}

#[test]
fn test_fetch_from_empty_dir_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let client: LocalClient<Bookmark> = LocalClient::new(dir.path());
    assert!(client.fetch_all().unwrap().is_empty());
    // Reading must not create the blob.
    assert!(!client.blob_path().exists());
}

#[test]
fn test_create_assigns_identity_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let client: LocalClient<Bookmark> = LocalClient::new(dir.path());

    let created = client
        .create(&bookmark_draft("Test", "https://example.com"))
        .unwrap();
    assert!(!created.id.is_empty());
    assert!(created.created_at > 0);
    assert_eq!(created.created_at, created.updated_at);

    // A second client over the same dir sees the record.
    let other: LocalClient<Bookmark> = LocalClient::new(dir.path());
    let all = other.fetch_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], created);
}

#[test]
fn test_one_blob_per_collection() {
    let dir = tempfile::tempdir().unwrap();
    let bookmarks: LocalClient<Bookmark> = LocalClient::new(dir.path());
    let groups: LocalClient<Group> = LocalClient::new(dir.path());

    bookmarks
        .create(&bookmark_draft("Test", "https://example.com"))
        .unwrap();
    groups
        .create(&GroupDraft {
            name: "Work".to_string(),
            color: "#10b981".to_string(),
            ..GroupDraft::default()
        })
        .unwrap();

    assert!(dir.path().join("bookmarks.json").exists());
    assert!(dir.path().join("groups.json").exists());
    // The blob is a plain JSON array.
    let content = std::fs::read_to_string(dir.path().join("groups.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(value.is_array());
}

#[test]
fn test_update_rewrites_fields() {
    let dir = tempfile::tempdir().unwrap();
    let client: LocalClient<Bookmark> = LocalClient::new(dir.path());

    let created = client
        .create(&bookmark_draft("Old", "https://old.example.com"))
        .unwrap();
    let updated = client
        .update(&created.id, &bookmark_draft("New", "https://new.example.com"))
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "New");
    assert_eq!(updated.url, "https://new.example.com");
    assert_eq!(updated.created_at, created.created_at);

    let all = client.fetch_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "New");
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let client: LocalClient<Bookmark> = LocalClient::new(dir.path());
    let result = client.update("nope", &bookmark_draft("X", "https://example.com"));
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[test]
fn test_delete_removes_record() {
    let dir = tempfile::tempdir().unwrap();
    let client: LocalClient<Bookmark> = LocalClient::new(dir.path());

    let a = client
        .create(&bookmark_draft("A", "https://a.example.com"))
        .unwrap();
    let b = client
        .create(&bookmark_draft("B", "https://b.example.com"))
        .unwrap();

    client.delete(&a.id).unwrap();
    let all = client.fetch_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, b.id);
}

#[test]
fn test_delete_unknown_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let client: LocalClient<Bookmark> = LocalClient::new(dir.path());
    assert!(matches!(client.delete("nope"), Err(ApiError::NotFound(_))));
}

#[test]
fn test_malformed_blob_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bookmarks.json"), "{ not json ]").unwrap();

    let client: LocalClient<Bookmark> = LocalClient::new(dir.path());
    assert!(matches!(
        client.fetch_all(),
        Err(ApiError::Serialization(_))
    ));
}

#[test]
fn test_ids_are_unique() {
    let dir = tempfile::tempdir().unwrap();
    let client: LocalClient<Bookmark> = LocalClient::new(dir.path());
    let a = client
        .create(&bookmark_draft("A", "https://a.example.com"))
        .unwrap();
    let b = client
        .create(&bookmark_draft("B", "https://b.example.com"))
        .unwrap();
    assert_ne!(a.id, b.id);
}
