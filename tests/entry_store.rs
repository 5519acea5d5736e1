mod common;

use chrono::{Duration, NaiveDate};
use common::{at, Harness};
use gratitude::constants::KEY_GRATITUDES;
use gratitude::storage::MemoryStore;
use gratitude::notifications::MemoryScheduler;
use gratitude::{EntryId, GratitudeEntry, JournalError};
use std::time::Duration as StdDuration;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_load_from_empty_storage() {
    let h = Harness::new(at(2024, 1, 1, 9, 0));
    assert_eq!(h.entries.load().await, 0);
    assert!(h.entries.is_empty().await);
}

#[tokio::test]
async fn test_load_corrupt_data_yields_empty() {
    let storage = MemoryStore::with_slots([(KEY_GRATITUDES, "{not json")]);
    let h = Harness::with_parts(storage, MemoryScheduler::granted(), at(2024, 1, 1, 9, 0));

    assert_eq!(h.entries.load().await, 0);
    assert!(h.entries.entries().await.is_empty());
}

#[tokio::test]
async fn test_load_read_failure_yields_empty() {
    let storage = MemoryStore::with_slots([(KEY_GRATITUDES, "[]")]);
    storage.set_fail_reads(true);
    let h = Harness::with_parts(storage, MemoryScheduler::granted(), at(2024, 1, 1, 9, 0));

    assert_eq!(h.entries.load().await, 0);
}

#[tokio::test]
async fn test_load_drops_duplicate_ids() {
    let raw = r#"[
        {"id":"a","text":"first","createdAt":"2024-01-01T10:00:00Z"},
        {"id":"a","text":"copy","createdAt":"2024-01-01T09:00:00Z"},
        {"id":"b","text":"second","createdAt":"2024-01-01T08:00:00Z"}
    ]"#;
    let storage = MemoryStore::with_slots([(KEY_GRATITUDES, raw)]);
    let h = Harness::with_parts(storage, MemoryScheduler::granted(), at(2024, 1, 1, 12, 0));

    assert_eq!(h.entries.load().await, 2);
    let texts: Vec<String> = h.entries.entries().await.into_iter().map(|e| e.text).collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[tokio::test]
async fn test_add_rejects_blank_text() {
    let h = Harness::new(at(2024, 1, 1, 9, 0));
    assert_eq!(h.entries.add("   ").await, Err(JournalError::EmptyText));
    assert_eq!(h.entries.add("").await, Err(JournalError::EmptyText));
    assert!(h.entries.is_empty().await);
    assert_eq!(h.storage.write_count(), 0);
}

#[tokio::test]
async fn test_add_prepends_and_persists() {
    let h = Harness::new(at(2024, 1, 1, 9, 0));
    h.entries.add("tea").await.unwrap();
    h.clock.advance(Duration::minutes(5));
    let newest = h.entries.add("biscuits").await.unwrap();

    let entries = h.entries.entries().await;
    assert_eq!(entries[0], newest);
    assert_eq!(entries[1].text, "tea");

    let raw = h.storage.peek(KEY_GRATITUDES).await.unwrap();
    let persisted: Vec<GratitudeEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, entries);
}

#[tokio::test]
async fn test_added_entry_appears_today_exactly_once() {
    let h = Harness::new(at(2024, 5, 20, 14, 0));
    h.entries.add("one").await.unwrap();
    let added = h.entries.add("two").await.unwrap();

    let today = h.entries.entries_for_date(day(2024, 5, 20)).await;
    assert_eq!(today.iter().filter(|e| e.id == added.id).count(), 1);
    assert!(h.entries.has_entry_today().await);
}

#[tokio::test]
async fn test_scenario_sunshine_then_family() {
    let raw = r#"[{"id":"s1","text":"sunshine","createdAt":"2024-01-01T10:00:00Z"}]"#;
    let storage = MemoryStore::with_slots([(KEY_GRATITUDES, raw)]);
    let h = Harness::with_parts(storage, MemoryScheduler::granted(), at(2024, 1, 1, 11, 0));
    h.entries.load().await;

    h.entries.add("family").await.unwrap();

    let texts: Vec<String> = h
        .entries
        .entries_for_date(day(2024, 1, 1))
        .await
        .into_iter()
        .map(|e| e.text)
        .collect();
    assert_eq!(texts, vec!["family", "sunshine"]);
}

#[tokio::test]
async fn test_delete_existing_entry() {
    let h = Harness::new(at(2024, 1, 1, 9, 0));
    let keep = h.entries.add("keep").await.unwrap();
    let gone = h.entries.add("gone").await.unwrap();

    assert!(h.entries.delete(&gone.id).await);
    assert_eq!(h.entries.entries().await, vec![keep]);
    assert!(h.entries.get(&gone.id).await.is_none());

    let reopened = h.reopened_entries().await;
    assert_eq!(reopened.entries().await, h.entries.entries().await);
}

#[tokio::test]
async fn test_delete_absent_id_is_noop() {
    let h = Harness::new(at(2024, 1, 1, 9, 0));
    h.entries.add("a").await.unwrap();
    h.entries.add("b").await.unwrap();
    let before = h.entries.entries().await;

    assert!(!h.entries.delete(&EntryId::from("missing")).await);
    assert_eq!(h.entries.entries().await, before);
}

#[tokio::test]
async fn test_clear_removes_slot() {
    let h = Harness::new(at(2024, 1, 1, 9, 0));
    h.entries.add("a").await.unwrap();
    h.entries.clear().await;

    assert!(h.entries.is_empty().await);
    assert!(h.storage.peek(KEY_GRATITUDES).await.is_none());
    assert!(!h.entries.has_entry_today().await);
}

#[tokio::test]
async fn test_memory_matches_storage_after_mixed_operations() {
    let h = Harness::new(at(2024, 3, 1, 8, 0));
    let mut ids = Vec::new();
    for text in ["rain", "bread", "music", "walk"] {
        ids.push(h.entries.add(text).await.unwrap().id);
        h.clock.advance(Duration::hours(7));
    }
    h.entries.delete(&ids[1]).await;
    h.entries.delete(&EntryId::from("nope")).await;
    h.entries.clear().await;
    h.entries.add("fresh start").await.unwrap();
    h.clock.advance(Duration::days(1));
    let last = h.entries.add("next day").await.unwrap();
    h.entries.delete(&last.id).await;

    let reopened = h.reopened_entries().await;
    assert_eq!(reopened.entries().await, h.entries.entries().await);
}

#[tokio::test]
async fn test_write_failure_keeps_memory_authoritative() {
    let h = Harness::new(at(2024, 1, 1, 9, 0));
    h.storage.set_fail_writes(true);

    let entry = h.entries.add("still here").await.unwrap();
    assert_eq!(h.entries.entries().await, vec![entry]);
    assert!(h.storage.peek(KEY_GRATITUDES).await.is_none());

    h.entries.clear().await;
    assert!(h.entries.is_empty().await);
}

#[tokio::test]
async fn test_grouped_by_date_partitions_entries() {
    let h = Harness::new(at(2024, 1, 1, 9, 0));
    h.entries.add("jan 1 morning").await.unwrap();
    h.clock.advance(Duration::hours(5));
    h.entries.add("jan 1 afternoon").await.unwrap();
    h.clock.advance(Duration::days(1));
    h.entries.add("jan 2").await.unwrap();
    h.clock.advance(Duration::days(3));
    h.entries.add("jan 5").await.unwrap();

    let groups = h.entries.grouped_by_date().await;
    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, h.entries.len().await);
    assert_eq!(groups.len(), 3);

    for (group_day, entries) in &groups {
        assert!(entries.iter().all(|e| e.day(h.entries.zone()) == *group_day));
    }

    let first_day: Vec<&str> = groups[&day(2024, 1, 1)].iter().map(|e| e.text.as_str()).collect();
    assert_eq!(first_day, vec!["jan 1 afternoon", "jan 1 morning"]);
}

#[tokio::test]
async fn test_has_entry_today_follows_clock() {
    let h = Harness::new(at(2024, 1, 1, 23, 0));
    h.entries.add("late").await.unwrap();
    assert!(h.entries.has_entry_today().await);

    h.clock.advance(Duration::hours(2));
    assert!(!h.entries.has_entry_today().await);
    assert!(h.entries.entries_for_today().await.is_empty());
}

#[tokio::test]
async fn test_overlapping_adds_persist_in_order() {
    let h = Harness::new(at(2024, 1, 1, 9, 0));
    h.storage.delay_next_write(StdDuration::from_millis(50));

    let (first, second) = tokio::join!(h.entries.add("a"), h.entries.add("b"));
    first.unwrap();
    second.unwrap();

    assert_eq!(h.entries.len().await, 2);
    let reopened = h.reopened_entries().await;
    assert_eq!(reopened.entries().await, h.entries.entries().await);
}

#[tokio::test]
async fn test_clear_during_slow_add_wins() {
    let h = Harness::new(at(2024, 1, 1, 9, 0));
    h.storage.delay_next_write(StdDuration::from_millis(50));

    let (added, ()) = tokio::join!(h.entries.add("short-lived"), h.entries.clear());
    added.unwrap();

    assert!(h.entries.is_empty().await);
    assert!(h.storage.peek(KEY_GRATITUDES).await.is_none());
}

#[tokio::test]
async fn test_reads_see_add_before_slow_write_lands() {
    let h = Harness::new(at(2024, 1, 1, 9, 0));
    h.storage.delay_next_write(StdDuration::from_millis(50));

    let (added, seen) = tokio::join!(h.entries.add("quick look"), async {
        tokio::time::sleep(StdDuration::from_millis(10)).await;
        (h.entries.len().await, h.storage.peek(KEY_GRATITUDES).await)
    });
    added.unwrap();

    assert_eq!(seen.0, 1);
    assert!(seen.1.is_none());
    assert_eq!(h.reopened_entries().await.len().await, 1);
}
