//! Tests for the session/auth manager: registration, credential checks, and
//! session persistence across simulated restarts.

use jotter::constants::USERS_KEY;
use jotter::storage::JsonFile;
use jotter::{SessionManager, Storage, User};

use crate::helpers::{test_manager, test_storage};

#[tokio::test]
async fn test_session_survives_fresh_manager() {
    // A fresh manager over the same storage simulates a process restart.
    let storage = test_storage();
    let manager = SessionManager::new(storage.clone());
    let registered = manager.register("a", "a@x.com", "p1").await.unwrap();

    let restarted = SessionManager::new(storage);
    assert_eq!(restarted.restore_session().await, Some(registered.clone()));

    // Same after an explicit login
    let logged_in = restarted.login("a@x.com", "p1").await.unwrap();
    assert_eq!(restarted.restore_session().await, Some(logged_in));
}

#[tokio::test]
async fn test_session_survives_file_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jotter.json");

    let registered = {
        let manager =
            SessionManager::new(Storage::new(JsonFile::open(&path).await.unwrap()));
        manager.register("alice", "alice@x.com", "pw1").await.unwrap()
    };

    let manager = SessionManager::new(Storage::new(JsonFile::open(&path).await.unwrap()));
    assert_eq!(manager.restore_session().await, Some(registered.clone()));
    assert_eq!(manager.users().await, vec![registered]);
}

#[tokio::test]
async fn test_raw_password_never_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jotter.json");

    let manager = SessionManager::new(Storage::new(JsonFile::open(&path).await.unwrap()));
    manager.register("alice", "alice@x.com", "hunter2").await.unwrap();
    drop(manager);

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert!(!on_disk.contains("hunter2"));
    assert!(on_disk.contains("argon2id"));
}

#[tokio::test]
async fn test_first_match_wins_in_collection_order() {
    // Registration prevents duplicate emails, but the lookup contract is
    // first-match in collection order if duplicates somehow exist.
    let storage = test_storage();
    let manager = SessionManager::new(storage.clone());

    let first = manager.register("old", "dup@x.com", "pw").await.unwrap();
    let mut users = manager.users().await;
    users.push(User {
        username: "new".to_string(),
        ..first.clone()
    });
    storage.put(USERS_KEY, &users).await.unwrap();

    let found = manager.login("dup@x.com", "pw").await.unwrap();
    assert_eq!(found.username, "old");
}

#[tokio::test]
async fn test_session_pointer_is_a_copy() {
    let storage = test_storage();
    let manager = SessionManager::new(storage.clone());
    let registered = manager.register("alice", "alice@x.com", "pw1").await.unwrap();

    // Mutate the collection behind the pointer's back
    let mut users = manager.users().await;
    users[0].username = "renamed".to_string();
    storage.put(USERS_KEY, &users).await.unwrap();

    // The pointer still holds the record as it was at login time
    let restored = manager.restore_session().await.unwrap();
    assert_eq!(restored.username, "alice");
    assert_eq!(restored, registered);
}

#[tokio::test]
async fn test_users_snapshot_grows_by_append() {
    let manager = test_manager();
    assert!(manager.users().await.is_empty());

    let a = manager.register("a", "a@x.com", "p").await.unwrap();
    let b = manager.register("b", "b@x.com", "p").await.unwrap();
    assert_eq!(manager.users().await, vec![a, b]);
}

#[tokio::test]
async fn test_full_scenario() {
    // register("alice", ...) → A; register("bob", <same email>) → rejected;
    // login as alice → A; logout → session cleared; restore → absent.
    let manager = test_manager();

    let alice = manager
        .register("alice", "alice@x.com", "pw1")
        .await
        .unwrap();

    let err = manager
        .register("bob", "alice@x.com", "pw2")
        .await
        .unwrap_err();
    assert!(err.is_duplicate_email());

    let logged_in = manager.login("alice@x.com", "pw1").await.unwrap();
    assert_eq!(logged_in.id, alice.id);

    manager.logout().await.unwrap();
    assert_eq!(manager.restore_session().await, None);
}
