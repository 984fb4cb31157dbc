//! Tests for the storage layer: typed access, the read-soft-fail policy, and
//! file-backed durability.

use serde::{Deserialize, Serialize};

use jotter::Storage;
use jotter::storage::JsonFile;

use crate::helpers::{FailingBackend, test_storage};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Note {
    title: String,
    pinned: bool,
}

#[tokio::test]
async fn test_keys_are_independent() {
    let storage = test_storage();
    storage.put("a", &1u8).await.unwrap();
    storage.put("b", &2u8).await.unwrap();

    storage.remove("a").await.unwrap();
    assert_eq!(storage.get::<u8>("a").await, None);
    assert_eq!(storage.get::<u8>("b").await, Some(2));
}

#[tokio::test]
async fn test_overwrite_replaces_value() {
    let storage = test_storage();
    let first = Note {
        title: "groceries".to_string(),
        pinned: false,
    };
    let second = Note {
        title: "groceries (updated)".to_string(),
        pinned: true,
    };

    storage.put("note", &first).await.unwrap();
    storage.put("note", &second).await.unwrap();
    assert_eq!(storage.get::<Note>("note").await, Some(second));
}

#[tokio::test]
async fn test_failed_read_is_absent_not_an_error() {
    let backend = FailingBackend::new();
    let storage = Storage::new(backend.clone());
    storage.put("k", &"v").await.unwrap();

    backend.fail_gets(true);
    // The caller cannot distinguish "never set" from "unreadable"
    assert_eq!(storage.get::<String>("k").await, None);

    backend.fail_gets(false);
    assert_eq!(storage.get::<String>("k").await, Some("v".to_string()));
}

#[tokio::test]
async fn test_failed_write_propagates() {
    let backend = FailingBackend::new();
    let storage = Storage::new(backend.clone());

    backend.fail_puts(true);
    let err = storage.put("k", &"v").await.unwrap_err();
    assert!(err.is_storage_error());
    assert!(err.is_io_error());

    // The failed write left nothing behind
    backend.fail_puts(false);
    assert_eq!(storage.get::<String>("k").await, None);
}

#[tokio::test]
async fn test_json_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jotter.json");

    {
        let storage = Storage::new(JsonFile::open(&path).await.unwrap());
        storage
            .put(
                "note",
                &Note {
                    title: "persisted".to_string(),
                    pinned: true,
                },
            )
            .await
            .unwrap();
    }

    let storage = Storage::new(JsonFile::open(&path).await.unwrap());
    assert_eq!(
        storage.get::<Note>("note").await,
        Some(Note {
            title: "persisted".to_string(),
            pinned: true,
        })
    );
}

#[tokio::test]
async fn test_json_file_remove_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jotter.json");

    {
        let storage = Storage::new(JsonFile::open(&path).await.unwrap());
        storage.put("gone", &1u8).await.unwrap();
        storage.put("kept", &2u8).await.unwrap();
        storage.remove("gone").await.unwrap();
    }

    let storage = Storage::new(JsonFile::open(&path).await.unwrap());
    assert_eq!(storage.get::<u8>("gone").await, None);
    assert_eq!(storage.get::<u8>("kept").await, Some(2));
}

#[tokio::test]
async fn test_garbage_file_fails_open_not_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jotter.json");
    tokio::fs::write(&path, "this is not a snapshot").await.unwrap();

    // A corrupt store file is a hard open error; soft-fail applies to
    // individual values, not to the store itself.
    let err = JsonFile::open(&path).await.unwrap_err();
    assert!(err.is_storage_error());
}
