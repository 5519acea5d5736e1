mod common;

use common::at;
use gratitude::storage::{KeyValueStore, SqliteStore};
use gratitude::utils::datetime::{DayZone, FixedClock};
use gratitude::EntryStore;
use std::sync::Arc;

#[tokio::test]
async fn test_sqlite_store_creation() {
    let result = SqliteStore::open_in_memory().await;
    assert!(result.is_ok(), "SqliteStore should be created successfully");
}

#[tokio::test]
async fn test_set_get_remove() {
    let store = SqliteStore::open_in_memory().await.unwrap();

    assert_eq!(store.get("isDarkMode").await.unwrap(), None);

    store.set("isDarkMode", "true").await.unwrap();
    assert_eq!(store.get("isDarkMode").await.unwrap().as_deref(), Some("true"));

    store.set("isDarkMode", "false").await.unwrap();
    assert_eq!(store.get("isDarkMode").await.unwrap().as_deref(), Some("false"));

    store.remove("isDarkMode").await.unwrap();
    assert_eq!(store.get("isDarkMode").await.unwrap(), None);

    // Removing again is fine
    store.remove("isDarkMode").await.unwrap();
}

#[tokio::test]
async fn test_slots_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("journal.db");

    {
        let store = SqliteStore::open(&path).await.unwrap();
        store.set("greeting", "hello").await.unwrap();
    }

    let store = SqliteStore::open(&path).await.unwrap();
    assert_eq!(store.get("greeting").await.unwrap().as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_entry_store_round_trip_through_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.db");
    let clock = Arc::new(FixedClock::new(at(2024, 1, 1, 10, 0)));

    let storage = Arc::new(SqliteStore::open(&path).await.unwrap());
    let entries = EntryStore::new(storage, clock.clone(), DayZone::Utc);
    entries.load().await;
    entries.add("sunshine").await.unwrap();
    let family = entries.add("family").await.unwrap();
    entries.add("traffic").await.unwrap();
    let expected = {
        let all = entries.entries().await;
        entries.delete(&all[0].id).await;
        entries.entries().await
    };
    assert_eq!(expected[0], family);

    let storage = Arc::new(SqliteStore::open(&path).await.unwrap());
    let reopened = EntryStore::new(storage, clock, DayZone::Utc);
    assert_eq!(reopened.load().await, 2);
    assert_eq!(reopened.entries().await, expected);
}
