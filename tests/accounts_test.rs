//! Account store behaviour against real files.

use hangman::accounts::{AccountStore, AuthError, PasswordError, StoreError};
use std::fs;
use tempfile::TempDir;

fn store() -> (TempDir, AccountStore) {
    let dir = TempDir::new().unwrap();
    let store = AccountStore::new(dir.path().join("users.json"));
    (dir, store)
}

#[test]
fn alternating_updates_keep_plays_in_sync() {
    let (_dir, store) = store();
    store.register("alice", "Secret123").unwrap();

    let n = 17;
    for i in 0..n {
        store.update_stats("alice", i % 2 == 0).unwrap();
    }

    let alice = store.get("alice").unwrap();
    assert_eq!(alice.plays, n);
    assert_eq!(alice.wins + alice.losses, n);
    assert_eq!(alice.wins, 9);
    assert_eq!(alice.losses, 8);
}

#[test]
fn update_for_unknown_user_is_not_found() {
    let (_dir, store) = store();
    assert!(matches!(
        store.update_stats("nobody", true),
        Err(StoreError::NotFound(name)) if name == "nobody"
    ));
}

#[test]
fn register_then_login() {
    let (_dir, store) = store();
    let created = store.register("  bob  ", "Hangman42").unwrap();
    assert_eq!((created.wins, created.losses, created.plays), (0, 0, 0));

    let logged_in = store.login("bob", "Hangman42").unwrap();
    assert_eq!(logged_in, created);
    assert!(store.exists("bob"));
}

#[test]
fn registration_rejections() {
    let (_dir, store) = store();
    store.register("bob", "Hangman42").unwrap();

    assert!(matches!(store.register("   ", "Hangman42"), Err(AuthError::EmptyUsername)));
    assert!(matches!(
        store.register("bob", "Another99"),
        Err(AuthError::UsernameTaken(_))
    ));
    assert!(matches!(
        store.register("carol", "short1A"),
        Err(AuthError::WeakPassword(PasswordError::TooShort))
    ));
    assert!(matches!(
        store.register("carol", "nouppercase1"),
        Err(AuthError::WeakPassword(PasswordError::NoUppercase))
    ));
    assert!(!store.exists("carol"));
}

#[test]
fn login_failures_are_distinct() {
    let (_dir, store) = store();
    store.register("bob", "Hangman42").unwrap();

    assert!(matches!(store.login("eve", "Hangman42"), Err(AuthError::UnknownUser(_))));
    assert!(matches!(store.login("bob", "hangman42"), Err(AuthError::WrongPassword)));
}

#[test]
fn missing_file_is_empty() {
    let (_dir, store) = store();
    assert!(store.load().is_empty());
    assert!(store.get("anyone").is_none());
}

#[test]
fn malformed_file_loads_what_it_can() {
    let (_dir, store) = store();
    fs::write(
        store.path(),
        r#"{
            "bob": {"wins": "3"},
            "dave": "not a record",
            "erin": {"password": "Secret123", "wins": 2.7, "losses": -1, "plays": true}
        }"#,
    )
    .unwrap();

    let accounts = store.load();
    assert_eq!(accounts.len(), 2);

    let bob = &accounts["bob"];
    assert_eq!((bob.wins, bob.losses, bob.plays), (3, 0, 0));

    let erin = &accounts["erin"];
    assert_eq!((erin.wins, erin.losses, erin.plays), (2, 0, 1));
}

#[test]
fn corrupt_file_is_empty_and_recoverable() {
    let (_dir, store) = store();
    fs::write(store.path(), "{ this is not json").unwrap();
    assert!(store.load().is_empty());

    store.register("frank", "Hangman42").unwrap();
    assert!(store.exists("frank"));
}

#[test]
fn file_is_pretty_printed_json() {
    let (_dir, store) = store();
    store.register("gina", "Hangman42").unwrap();
    store.update_stats("gina", true).unwrap();

    let contents = fs::read_to_string(store.path()).unwrap();
    assert!(contents.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["gina"]["password"], "Hangman42");
    assert_eq!(value["gina"]["wins"], 1);
    assert_eq!(value["gina"]["losses"], 0);
    assert_eq!(value["gina"]["plays"], 1);
}

#[test]
fn write_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let store = AccountStore::new(dir.path().join("missing-dir").join("users.json"));
    assert!(matches!(
        store.register("hank", "Hangman42"),
        Err(AuthError::Store(StoreError::Io { .. }))
    ));
}

#[test]
fn saving_keeps_entries_that_are_not_records() {
    let (_dir, store) = store();
    fs::write(
        store.path(),
        r#"{"bob": {"password": "Hangman42"}, "dave": "not a record", "notes": [1, 2]}"#,
    )
    .unwrap();

    store.register("carol", "Secret123").unwrap();
    store.update_stats("bob", true).unwrap();

    let contents = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["dave"], "not a record");
    assert_eq!(value["notes"], serde_json::json!([1, 2]));
    assert_eq!(value["bob"]["wins"], 1);
    assert_eq!(value["carol"]["plays"], 0);
    assert_eq!(store.load().len(), 2);
}
