use chrono::NaiveDate;
use log::{debug, error, info, warn};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use super::{EntryId, GratitudeEntry, JournalError};
use crate::constants::KEY_GRATITUDES;
use crate::storage::KeyValueStore;
use crate::utils::datetime::{Clock, DayZone};

/// Authoritative, persisted collection of gratitude entries.
///
/// Entries are kept newest first. Every mutation updates memory before the
/// persistence write is issued, so readers see the change immediately even
/// when the write is slow or fails. Mutations hold a persistence lock until
/// their write completes, so overlapping calls reach storage in the order
/// they were applied. Storage failures are logged and swallowed; memory
/// stays the source of truth for the session.
///
/// # Example
/// ```rust,no_run
/// use gratitude::journal::EntryStore;
/// use gratitude::storage::MemoryStore;
/// use gratitude::utils::datetime::{DayZone, SystemClock};
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let store = EntryStore::new(Arc::new(MemoryStore::new()), Arc::new(SystemClock), DayZone::Local);
/// store.load().await;
/// store.add("the smell of rain").await?;
/// assert!(store.has_entry_today().await);
/// # Ok(())
/// # }
/// ```
pub struct EntryStore {
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    zone: DayZone,
    entries: RwLock<Vec<GratitudeEntry>>,
    persist_lock: Mutex<()>,
}

impl EntryStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>, zone: DayZone) -> Self {
        Self {
            storage,
            clock,
            zone,
            entries: RwLock::new(Vec::new()),
            persist_lock: Mutex::new(()),
        }
    }

    /// Zone in which entries are folded into calendar days
    pub fn zone(&self) -> DayZone {
        self.zone
    }

    /// Today's date according to the store's clock and zone
    pub fn today(&self) -> NaiveDate {
        self.clock.today(self.zone)
    }

    /// Replace memory with the persisted collection.
    ///
    /// Absent, unreadable or corrupt data yields an empty collection.
    /// Returns the number of entries loaded.
    pub async fn load(&self) -> usize {
        let _persisting = self.persist_lock.lock().await;
        let loaded = match self.storage.get(KEY_GRATITUDES).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<GratitudeEntry>>(&raw) {
                Ok(entries) => dedupe_ids(entries),
                Err(e) => {
                    warn!("Discarding corrupt gratitude data: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                error!("Failed to read gratitudes: {}", e);
                Vec::new()
            }
        };

        let count = loaded.len();
        *self.entries.write().await = loaded;
        info!("Loaded {} gratitude(s)", count);
        count
    }

    /// Record a new entry stamped with the current time.
    ///
    /// # Errors
    /// Returns [`JournalError::EmptyText`] for empty or whitespace-only text.
    /// Persistence failures are not reported.
    pub async fn add(&self, text: &str) -> Result<GratitudeEntry, JournalError> {
        let entry = GratitudeEntry::new(text, self.clock.now())?;

        let _persisting = self.persist_lock.lock().await;
        let snapshot = {
            let mut entries = self.entries.write().await;
            entries.insert(0, entry.clone());
            entries.clone()
        };
        debug!("Added gratitude {}", entry.id);

        self.persist(&snapshot).await;
        Ok(entry)
    }

    /// Remove the entry with `id`. Returns whether an entry was removed.
    pub async fn delete(&self, id: &EntryId) -> bool {
        let _persisting = self.persist_lock.lock().await;
        let (removed, snapshot) = {
            let mut entries = self.entries.write().await;
            let before = entries.len();
            entries.retain(|entry| &entry.id != id);
            (entries.len() != before, entries.clone())
        };

        if removed {
            debug!("Deleted gratitude {}", id);
        } else {
            debug!("No gratitude {} to delete", id);
        }
        self.persist(&snapshot).await;
        removed
    }

    /// Drop every entry and remove the persisted slot.
    pub async fn clear(&self) {
        let _persisting = self.persist_lock.lock().await;
        self.entries.write().await.clear();
        info!("Cleared all gratitudes");

        if let Err(e) = self.storage.remove(KEY_GRATITUDES).await {
            error!("Failed to remove persisted gratitudes: {}", e);
        }
    }

    /// Snapshot of every entry, newest first
    pub async fn entries(&self) -> Vec<GratitudeEntry> {
        self.entries.read().await.clone()
    }

    /// Look up a single entry
    pub async fn get(&self, id: &EntryId) -> Option<GratitudeEntry> {
        self.entries.read().await.iter().find(|entry| &entry.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Entries created on `date`, newest first
    pub async fn entries_for_date(&self, date: NaiveDate) -> Vec<GratitudeEntry> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.day(self.zone) == date)
            .cloned()
            .collect()
    }

    /// Entries created today, newest first
    pub async fn entries_for_today(&self) -> Vec<GratitudeEntry> {
        self.entries_for_date(self.today()).await
    }

    /// Whether anything was written today
    pub async fn has_entry_today(&self) -> bool {
        let today = self.today();
        self.entries.read().await.iter().any(|entry| entry.day(self.zone) == today)
    }

    /// Entries keyed by creation day; each group keeps the store's order
    pub async fn grouped_by_date(&self) -> BTreeMap<NaiveDate, Vec<GratitudeEntry>> {
        let mut groups: BTreeMap<NaiveDate, Vec<GratitudeEntry>> = BTreeMap::new();
        for entry in self.entries.read().await.iter() {
            groups.entry(entry.day(self.zone)).or_default().push(entry.clone());
        }
        groups
    }

    async fn persist(&self, entries: &[GratitudeEntry]) {
        let raw = match serde_json::to_string(entries) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to serialize gratitudes: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(KEY_GRATITUDES, &raw).await {
            error!("Failed to persist {} gratitude(s): {}", entries.len(), e);
        }
    }
}

/// Keep the first occurrence of every id
fn dedupe_ids(entries: Vec<GratitudeEntry>) -> Vec<GratitudeEntry> {
    let mut seen = HashSet::new();
    let before = entries.len();
    let unique: Vec<GratitudeEntry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.id.clone()))
        .collect();

    if unique.len() != before {
        warn!("Dropped {} gratitude(s) with duplicate ids", before - unique.len());
    }
    unique
}
