use rusqlite::Connection;
use taskpad_core::db::migrations::latest_version;
use taskpad_core::db::{open_db, open_db_in_memory};
use taskpad_core::{KvStore, SqliteKvStore, StoreError};

#[test]
fn get_returns_none_for_unwritten_key() {
    let store = SqliteKvStore::try_new(open_db_in_memory().unwrap()).unwrap();

    assert_eq!(store.get("taskpad.items").unwrap(), None);
}

#[test]
fn set_then_get_roundtrip() {
    let mut store = SqliteKvStore::try_new(open_db_in_memory().unwrap()).unwrap();

    store.set("taskpad.items", "[]").unwrap();

    assert_eq!(store.get("taskpad.items").unwrap().as_deref(), Some("[]"));
}

#[test]
fn set_overwrites_previous_value() {
    let mut store = SqliteKvStore::try_new(open_db_in_memory().unwrap()).unwrap();

    store.set("taskpad.items", "first").unwrap();
    store.set("taskpad.items", "second").unwrap();

    assert_eq!(
        store.get("taskpad.items").unwrap().as_deref(),
        Some("second")
    );
}

#[test]
fn keys_are_independent() {
    let mut store = SqliteKvStore::try_new(open_db_in_memory().unwrap()).unwrap();

    store.set("one", "1").unwrap();
    store.set("two", "2").unwrap();

    assert_eq!(store.get("one").unwrap().as_deref(), Some("1"));
    assert_eq!(store.get("two").unwrap().as_deref(), Some("2"));
}

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskpad.db");

    let mut store = SqliteKvStore::try_new(open_db(&path).unwrap()).unwrap();
    store.set("taskpad.items", r#"[{"id":1,"isDone":false}]"#).unwrap();
    drop(store);

    let store = SqliteKvStore::try_new(open_db(&path).unwrap()).unwrap();
    assert_eq!(
        store.get("taskpad.items").unwrap().as_deref(),
        Some(r#"[{"id":1,"isDone":false}]"#)
    );
}

#[test]
fn try_new_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteKvStore::try_new(conn) {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn try_new_rejects_connection_without_kv_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteKvStore::try_new(conn),
        Err(StoreError::MissingRequiredTable("kv"))
    ));
}
