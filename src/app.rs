//! Application context.
//!
//! Builds the entry and preference stores once at start-up and hands out
//! shared handles to whoever presents them.

use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

use crate::config::Config;
use crate::journal::EntryStore;
use crate::notifications::NotificationScheduler;
use crate::preferences::PreferenceStore;
use crate::storage::{KeyValueStore, SqliteStore};
use crate::utils::datetime::{Clock, SystemClock};

/// The loaded stores of a running journal.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub entries: Arc<EntryStore>,
    pub preferences: Arc<PreferenceStore>,
}

impl AppContext {
    /// Build and load both stores on top of the given collaborators.
    ///
    /// # Errors
    /// Returns an error only when the configuration is invalid. Storage and
    /// permission problems are logged and the stores start from defaults.
    pub async fn bootstrap(
        config: Config,
        storage: Arc<dyn KeyValueStore>,
        scheduler: Arc<dyn NotificationScheduler>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let zone = config.day_zone()?;

        let entries = Arc::new(EntryStore::new(storage.clone(), clock, zone));
        let preferences = Arc::new(PreferenceStore::new(
            storage,
            scheduler,
            entries.clone(),
            config.reminders.schedule(),
        ));

        entries.load().await;
        preferences.load().await;

        if config.reminders.request_permission_on_start {
            match preferences.ensure_notification_permission().await {
                Ok(status) => info!("Notification permission: {:?}", status),
                Err(e) => warn!("Could not check notification permission: {}", e),
            }
        }

        Ok(Self {
            config,
            entries,
            preferences,
        })
    }

    /// Open the configured SQLite database and bootstrap on the system clock.
    pub async fn open(config: Config, scheduler: Arc<dyn NotificationScheduler>) -> Result<Self> {
        let path = config.database_path()?;
        let storage = SqliteStore::open(&path)
            .await
            .with_context(|| format!("Failed to open journal database: {}", path.display()))?;

        Self::bootstrap(config, Arc::new(storage), scheduler, Arc::new(SystemClock)).await
    }
}
