use std::thread::sleep;
use std::time::Duration;

use cabinetkit_core::StorageError;
use cabinetkit_designer::{
    Design, DesignFile, DesignRepository, InMemoryDesignStore, JsonDirectoryStore, FORMAT_VERSION,
};
use uuid::Uuid;

fn document(name: &str) -> DesignFile {
    DesignFile::from_design(&Design::new(name))
}

/// Behavior every repository shares
fn exercise_repository(store: &mut dyn DesignRepository) {
    let hall = store.save_design(document("Hall")).unwrap();
    sleep(Duration::from_millis(5));
    let kitchen = store.save_design(document("Kitchen")).unwrap();

    let listed: Vec<String> = store
        .list_designs()
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(listed, vec!["Kitchen", "Hall"]);

    sleep(Duration::from_millis(5));
    store.update_design(hall, document("Hallway")).unwrap();
    let record = store.load_design(hall).unwrap();
    assert_eq!(record.name, "Hallway");
    assert!(record.updated > record.created);
    assert_eq!(store.list_designs().unwrap()[0].id, hall);

    let design = record.document.into_design().unwrap();
    assert_eq!(design.name, "Hallway");

    store.delete_design(kitchen).unwrap();
    assert_eq!(store.list_designs().unwrap().len(), 1);
    assert!(matches!(
        store.load_design(kitchen),
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete_design(Uuid::new_v4()),
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(
        store.update_design(Uuid::new_v4(), document("Ghost")),
        Err(StorageError::NotFound { .. })
    ));
}

#[test]
fn test_in_memory_store() {
    let mut store = InMemoryDesignStore::new();
    assert!(store.is_empty());
    exercise_repository(&mut store);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_json_directory_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonDirectoryStore::open(dir.path().join("designs")).unwrap();
    exercise_repository(&mut store);

    let files = std::fs::read_dir(store.root()).unwrap().count();
    assert_eq!(files, 1);
}

#[test]
fn test_directory_store_skips_unreadable_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonDirectoryStore::open(dir.path()).unwrap();
    store.save_design(document("Hall")).unwrap();
    std::fs::write(dir.path().join("garbage.json"), "not a design").unwrap();
    std::fs::write(dir.path().join("readme.txt"), "ignored").unwrap();

    let records = store.list_designs().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Hall");
}

#[test]
fn test_directory_store_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let id = {
        let mut store = JsonDirectoryStore::open(dir.path()).unwrap();
        store.save_design(document("Hall")).unwrap()
    };

    let store = JsonDirectoryStore::open(dir.path()).unwrap();
    assert_eq!(store.load_design(id).unwrap().name, "Hall");
}

#[test]
fn test_directory_store_migrates_old_documents() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDirectoryStore::open(dir.path()).unwrap();
    let id = Uuid::new_v4();
    let record = format!(
        r#"{{
            "id": "{id}",
            "name": "Old hallway",
            "created": "2023-03-01T09:00:00Z",
            "updated": "2023-03-02T09:00:00Z",
            "document": {{
                "name": "Old hallway",
                "ceilingH": 250,
                "cabinets": [
                    {{"id": 1, "width": 60, "height": 230, "accessories": [
                        {{"id": 10, "type": "door-left", "y": 0, "height": 230}}
                    ]}}
                ]
            }}
        }}"#
    );
    std::fs::write(dir.path().join(format!("{}.json", id)), record).unwrap();

    let loaded = store.load_design(id).unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.document.version, FORMAT_VERSION);
    assert_eq!(store.list_designs().unwrap().len(), 1);

    let design = loaded.document.into_design().unwrap();
    assert_eq!(design.ceiling_height(), 250.0);
    assert_eq!(design.cabinets()[0].height(), 230.0);
}

#[test]
fn test_directory_store_rejects_future_documents() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDirectoryStore::open(dir.path()).unwrap();
    let id = Uuid::new_v4();
    let record = format!(
        r#"{{"id": "{id}", "name": "Later", "created": "2030-01-01T00:00:00Z",
            "updated": "2030-01-01T00:00:00Z",
            "document": {{"format": "cabinetkit-design", "version": 99}}}}"#
    );
    std::fs::write(dir.path().join(format!("{}.json", id)), record).unwrap();

    assert!(matches!(
        store.load_design(id),
        Err(StorageError::Document(_))
    ));
}
