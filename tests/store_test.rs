//! Store-level tests for the playlist document
//!
//! These tests exercise `PlaylistStore` directly, without the HTTP layer:
//! - Record construction defaults on upsert
//! - Replace-not-merge semantics
//! - Delete and single-video removal
//! - Document round-trip across a simulated process restart

use tempfile::TempDir;

use playlister::error::Error;
use playlister::model::VideoInput;
use playlister::store::PlaylistStore;

/// Helper to create a store backed by a document inside a temp dir
fn setup_store() -> (PlaylistStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = PlaylistStore::new(temp_dir.path().join("playlists.json"));
    (store, temp_dir)
}

/// Helper to build a minimal video input
fn video(id: &str, title: &str) -> VideoInput {
    VideoInput {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        thumbnail_url: String::new(),
        views: 0,
    }
}

#[tokio::test]
async fn test_upsert_then_get_returns_all_records() {
    let (store, _temp_dir) = setup_store();

    store
        .upsert(
            "mix",
            vec![video("v1", "One"), video("v2", "Two"), video("v3", "Three")],
        )
        .await
        .unwrap();

    let records = store.get("mix").await.unwrap();
    assert_eq!(records.len(), 3);

    // Insertion order is preserved
    assert_eq!(records[0].title, "One");
    assert_eq!(records[2].title, "Three");

    for record in &records {
        assert_eq!(record.video_id, record.id);
        assert_eq!(record.likes, 0);
        assert_eq!(record.comments, 0);
        assert_eq!(record.created_at, record.updated_at);
    }
}

#[tokio::test]
async fn test_upsert_applies_input_defaults() {
    let (store, _temp_dir) = setup_store();

    store.upsert("minimal", vec![video("v1", "Bare")]).await.unwrap();

    let records = store.get("minimal").await.unwrap();
    assert_eq!(records[0].description, "");
    assert_eq!(records[0].thumbnail_url, "");
    assert_eq!(records[0].views, 0);
}

#[tokio::test]
async fn test_upsert_replaces_existing_playlist() {
    let (store, _temp_dir) = setup_store();

    store.upsert("x", vec![video("a", "First")]).await.unwrap();
    store.upsert("x", vec![video("b", "Second")]).await.unwrap();

    let records = store.get("x").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].video_id, "b");
}

#[tokio::test]
async fn test_get_missing_playlist() {
    let (store, _temp_dir) = setup_store();

    let err = store.get("ghost").await.unwrap_err();
    assert!(matches!(err, Error::PlaylistNotFound));
}

#[tokio::test]
async fn test_delete_removes_playlist() {
    let (store, _temp_dir) = setup_store();

    store.upsert("gone", vec![video("v1", "Bye")]).await.unwrap();
    store.delete("gone").await.unwrap();

    let err = store.get("gone").await.unwrap_err();
    assert!(matches!(err, Error::PlaylistNotFound));
}

#[tokio::test]
async fn test_delete_missing_playlist_leaves_store_untouched() {
    let (store, _temp_dir) = setup_store();

    store.upsert("keep", vec![video("v1", "Stay")]).await.unwrap();

    let err = store.delete("ghost").await.unwrap_err();
    assert!(matches!(err, Error::PlaylistNotFound));

    let doc = store.list_all().await.unwrap();
    assert_eq!(doc.len(), 1);
    assert!(doc.contains_key("keep"));
}

#[tokio::test]
async fn test_remove_video_filters_matching_records_only() {
    let (store, _temp_dir) = setup_store();

    store
        .upsert("mix", vec![video("v1", "Keep"), video("v2", "Drop")])
        .await
        .unwrap();

    store.remove_video("mix", "v2").await.unwrap();

    let records = store.get("mix").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].video_id, "v1");
}

#[tokio::test]
async fn test_remove_missing_video_succeeds_unchanged() {
    let (store, _temp_dir) = setup_store();

    store.upsert("stable", vec![video("v1", "Here")]).await.unwrap();

    store.remove_video("stable", "nope").await.unwrap();

    let records = store.get("stable").await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_remove_video_from_missing_playlist() {
    let (store, _temp_dir) = setup_store();

    let err = store.remove_video("ghost", "v1").await.unwrap_err();
    assert!(matches!(err, Error::PlaylistNotFound));
}

#[tokio::test]
async fn test_list_all_on_missing_document_is_empty() {
    let (store, _temp_dir) = setup_store();

    let doc = store.list_all().await.unwrap();
    assert!(doc.is_empty());
}

#[tokio::test]
async fn test_document_round_trip_survives_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("playlists.json");

    let store = PlaylistStore::new(&path);
    store
        .upsert("first", vec![video("v1", "One"), video("v2", "Two")])
        .await
        .unwrap();
    store.upsert("second", vec![video("v3", "Three")]).await.unwrap();

    let before = store.list_all().await.unwrap();
    drop(store);

    // A fresh store on the same path sees an identical document
    let reopened = PlaylistStore::new(&path);
    let after = reopened.list_all().await.unwrap();

    assert_eq!(before, after);
}
