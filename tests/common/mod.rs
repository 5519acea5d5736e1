#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use gratitude::notifications::MemoryScheduler;
use gratitude::reminders::ReminderSchedule;
use gratitude::storage::MemoryStore;
use gratitude::utils::datetime::{DayZone, FixedClock};
use gratitude::{EntryStore, PreferenceStore};

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// Stores wired over in-memory collaborators, with the clock pinned in UTC
pub struct Harness {
    pub storage: Arc<MemoryStore>,
    pub scheduler: Arc<MemoryScheduler>,
    pub clock: Arc<FixedClock>,
    pub entries: Arc<EntryStore>,
    pub preferences: PreferenceStore,
}

impl Harness {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_parts(MemoryStore::new(), MemoryScheduler::granted(), now)
    }

    pub fn with_parts(storage: MemoryStore, scheduler: MemoryScheduler, now: DateTime<Utc>) -> Self {
        let storage = Arc::new(storage);
        let scheduler = Arc::new(scheduler);
        let clock = Arc::new(FixedClock::new(now));
        let entries = Arc::new(EntryStore::new(storage.clone(), clock.clone(), DayZone::Utc));
        let preferences = PreferenceStore::new(
            storage.clone(),
            scheduler.clone(),
            entries.clone(),
            ReminderSchedule::default(),
        );
        Self {
            storage,
            scheduler,
            clock,
            entries,
            preferences,
        }
    }

    /// A second entry store reading the same storage, as after a restart
    pub async fn reopened_entries(&self) -> EntryStore {
        let store = EntryStore::new(self.storage.clone(), self.clock.clone(), DayZone::Utc);
        store.load().await;
        store
    }
}
