use linkboard::api::local::LocalClient;
use linkboard::stores::tab_store::TabStore;
use linkboard::types::errors::{StoreError, ValidationError};
use linkboard::types::tab::TabDraft;

fn store(dir: &tempfile::TempDir) -> TabStore {
    TabStore::new(Box::new(LocalClient::new(dir.path())))
}

#[test]
fn test_add_creates_tab() {
    let dir = tempfile::tempdir().unwrap();
    let mut tabs = store(&dir);

    let created = tabs
        .add(TabDraft {
            name: "Work".to_string(),
            color: Some("#1f6feb".to_string()),
        })
        .unwrap();
    assert_eq!(created.name, "Work");
    assert_eq!(tabs.items().len(), 1);
    assert_eq!(tabs.get(&created.id).unwrap().color.as_deref(), Some("#1f6feb"));
}

#[test]
fn test_add_rejects_empty_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut tabs = store(&dir);
    let result = tabs.add(TabDraft {
        name: " ".to_string(),
        color: None,
    });
    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::EmptyField("name")))
    ));
}

#[test]
fn test_update_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let mut tabs = store(&dir);

    let created = tabs
        .add(TabDraft {
            name: "Work".to_string(),
            color: None,
        })
        .unwrap();
    let updated = tabs
        .update(
            &created.id,
            TabDraft {
                name: "Projects".to_string(),
                color: Some("#ff0000".to_string()),
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Projects");

    tabs.remove(&created.id).unwrap();
    assert!(tabs.items().is_empty());
}

#[test]
fn test_fetch_round_trips_through_storage() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = store(&dir);
    writer
        .add(TabDraft {
            name: "Work".to_string(),
            color: None,
        })
        .unwrap();

    let mut reader = store(&dir);
    reader.fetch().unwrap();
    assert_eq!(reader.items().len(), 1);
    assert_eq!(reader.items()[0].name, "Work");
}
