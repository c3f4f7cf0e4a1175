mod common;

use std::fs;

use inventory::services::InstanceStore;
use inventory::InventoryError;

use common::{sample_data_file, sample_json, write_data_file};

#[tokio::test]
async fn test_get_all_loads_lazily_and_caches() {
    let file = sample_data_file(3);
    let store = InstanceStore::new(file.path());

    let first = store.get_all().await.unwrap();
    assert_eq!(first.len(), 3);

    // Cached: rewriting the file has no effect until refresh.
    fs::write(file.path(), sample_json(5).to_string()).unwrap();
    let second = store.get_all().await.unwrap();
    assert_eq!(second.len(), 3);
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_refresh_rereads_file() {
    let file = sample_data_file(3);
    let store = InstanceStore::new(file.path());
    assert_eq!(store.get_all().await.unwrap().len(), 3);

    fs::write(file.path(), sample_json(5).to_string()).unwrap();
    store.refresh().await;
    assert_eq!(store.get_all().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_refresh_with_unchanged_file_yields_identical_collection() {
    let file = sample_data_file(12);
    let store = InstanceStore::new(file.path());
    let before = store.load().await.unwrap();
    store.refresh().await;
    let after = store.get_all().await.unwrap();
    assert_eq!(*before, *after);
}

#[tokio::test]
async fn test_snapshot_survives_refresh() {
    let file = sample_data_file(4);
    let store = InstanceStore::new(file.path());
    let snapshot = store.get_all().await.unwrap();

    fs::write(file.path(), "[]").unwrap();
    store.refresh().await;
    assert!(store.get_all().await.unwrap().is_empty());
    assert_eq!(snapshot.len(), 4);
}

#[tokio::test]
async fn test_get_by_id() {
    let file = sample_data_file(6);
    let store = InstanceStore::new(file.path());

    let found = store.get_by_id(4).await.unwrap().expect("id 4 exists");
    assert_eq!(found.id, 4);
    assert_eq!(found.name, "192.168.1.4");

    assert!(store.get_by_id(7).await.unwrap().is_none());
    assert!(store.get_by_id(0).await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = InstanceStore::new(dir.path().join("nope.json"));
    let err = store.get_all().await.unwrap_err();
    assert!(matches!(err, InventoryError::NotFound(_)));
    assert!(err.to_string().contains("nope.json"));
}

#[tokio::test]
async fn test_malformed_file_is_format_error() {
    let file = write_data_file("{ not json");
    let store = InstanceStore::new(file.path());
    assert!(matches!(store.load().await.unwrap_err(), InventoryError::Format(_)));
}

#[tokio::test]
async fn test_failed_load_keeps_previous_collection() {
    let file = sample_data_file(2);
    let store = InstanceStore::new(file.path());
    store.load().await.unwrap();

    fs::write(file.path(), "garbage").unwrap();
    assert!(store.load().await.is_err());
    assert_eq!(store.get_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_failed_lazy_load_is_retried() {
    let file = write_data_file("garbage");
    let store = InstanceStore::new(file.path());
    assert!(store.get_all().await.is_err());

    fs::write(file.path(), sample_json(1).to_string()).unwrap();
    assert_eq!(store.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_degrade_mode_serves_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = InstanceStore::new(dir.path().join("missing.json")).degrade_on_load_error(true);
    assert!(store.get_all().await.unwrap().is_empty());
    assert!(store.get_by_id(1).await.unwrap().is_none());
}
