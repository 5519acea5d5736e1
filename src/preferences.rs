//! User preferences and reminder switches.
//!
//! The [`PreferenceStore`] owns three boolean flags and writes each change
//! through to storage. The two reminder flags are also switches for the
//! notification scheduler: turning one on schedules its notifications,
//! turning it off cancels them.
//!
//! Reminder flags follow a small state machine:
//!
//! ```text
//! OFF --(toggle, permission granted)--> ON --(toggle)--> OFF
//! OFF --(toggle, permission denied)---> OFF
//! ```

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::constants::{KEY_DAILY_REMINDER, KEY_DARK_MODE, KEY_EVENING_SUMMARY};
use crate::journal::EntryStore;
use crate::notifications::{NotificationError, NotificationRequest, NotificationScheduler, PermissionStatus};
use crate::reminders::{self, ReminderSchedule};
use crate::storage::KeyValueStore;

/// Snapshot of the user's preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub dark_mode: bool,
    pub daily_reminder_enabled: bool,
    pub evening_summary_enabled: bool,
}

/// One of the persisted boolean flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceFlag {
    DarkMode,
    DailyReminder,
    EveningSummary,
}

impl PreferenceFlag {
    pub const ALL: [PreferenceFlag; 3] = [
        PreferenceFlag::DarkMode,
        PreferenceFlag::DailyReminder,
        PreferenceFlag::EveningSummary,
    ];

    /// Storage key of the flag
    pub fn key(self) -> &'static str {
        match self {
            PreferenceFlag::DarkMode => KEY_DARK_MODE,
            PreferenceFlag::DailyReminder => KEY_DAILY_REMINDER,
            PreferenceFlag::EveningSummary => KEY_EVENING_SUMMARY,
        }
    }

    fn get(self, prefs: &Preferences) -> bool {
        match self {
            PreferenceFlag::DarkMode => prefs.dark_mode,
            PreferenceFlag::DailyReminder => prefs.daily_reminder_enabled,
            PreferenceFlag::EveningSummary => prefs.evening_summary_enabled,
        }
    }

    fn set(self, prefs: &mut Preferences, value: bool) {
        match self {
            PreferenceFlag::DarkMode => prefs.dark_mode = value,
            PreferenceFlag::DailyReminder => prefs.daily_reminder_enabled = value,
            PreferenceFlag::EveningSummary => prefs.evening_summary_enabled = value,
        }
    }
}

/// Outcome of toggling a reminder flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderToggle {
    /// The flag is now on; `scheduled` notifications were handed to the scheduler
    Activated { scheduled: usize },
    /// The flag is now off and scheduled notifications were cancelled
    Stopped,
    /// Permission was not granted; the flag stays off
    PermissionDenied,
}

/// Persisted preference flags plus reminder scheduling.
pub struct PreferenceStore {
    storage: Arc<dyn KeyValueStore>,
    scheduler: Arc<dyn NotificationScheduler>,
    entries: Arc<EntryStore>,
    schedule: ReminderSchedule,
    prefs: RwLock<Preferences>,
    /// Held from a flag change through its storage write
    persist_lock: Mutex<()>,
}

impl PreferenceStore {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        scheduler: Arc<dyn NotificationScheduler>,
        entries: Arc<EntryStore>,
        schedule: ReminderSchedule,
    ) -> Self {
        Self {
            storage,
            scheduler,
            entries,
            schedule,
            prefs: RwLock::new(Preferences::default()),
            persist_lock: Mutex::new(()),
        }
    }

    /// Read every flag from storage. Absent or unreadable flags are off.
    pub async fn load(&self) -> Preferences {
        let _persisting = self.persist_lock.lock().await;
        let mut loaded = Preferences::default();
        for flag in PreferenceFlag::ALL {
            let value = match self.storage.get(flag.key()).await {
                Ok(raw) => raw.as_deref() == Some("true"),
                Err(e) => {
                    error!("Failed to read preference {}: {}", flag.key(), e);
                    false
                }
            };
            flag.set(&mut loaded, value);
        }

        *self.prefs.write().await = loaded;
        info!("Loaded preferences: {:?}", loaded);
        loaded
    }

    /// Current snapshot of every flag
    pub async fn preferences(&self) -> Preferences {
        *self.prefs.read().await
    }

    pub async fn is_dark_mode(&self) -> bool {
        self.prefs.read().await.dark_mode
    }

    pub async fn is_daily_reminder_enabled(&self) -> bool {
        self.prefs.read().await.daily_reminder_enabled
    }

    pub async fn is_evening_summary_enabled(&self) -> bool {
        self.prefs.read().await.evening_summary_enabled
    }

    /// Value of a single flag
    pub async fn flag(&self, flag: PreferenceFlag) -> bool {
        flag.get(&*self.prefs.read().await)
    }

    /// Flip dark mode and persist it. Returns the new value.
    pub async fn toggle_dark_mode(&self) -> bool {
        let _persisting = self.persist_lock.lock().await;
        let value = {
            let mut prefs = self.prefs.write().await;
            prefs.dark_mode = !prefs.dark_mode;
            prefs.dark_mode
        };
        self.persist_flag(PreferenceFlag::DarkMode, value).await;
        value
    }

    /// Turn the daily reminders on or off.
    ///
    /// # Errors
    /// Returns the scheduler error when scheduling or cancelling fails; the
    /// flag is left unchanged in that case.
    pub async fn toggle_daily_reminder(&self) -> Result<ReminderToggle, NotificationError> {
        let _persisting = self.persist_lock.lock().await;
        if self.is_daily_reminder_enabled().await {
            self.stop_daily_reminders().await?;
            self.write_flag(PreferenceFlag::DailyReminder, false).await;
            return Ok(ReminderToggle::Stopped);
        }

        if !self.ensure_notification_permission().await?.is_granted() {
            warn!("Daily reminders stay off: notification permission not granted");
            return Ok(ReminderToggle::PermissionDenied);
        }

        let scheduled = self.activate_daily_reminders().await?;
        self.write_flag(PreferenceFlag::DailyReminder, true).await;
        Ok(ReminderToggle::Activated { scheduled })
    }

    /// Turn the evening summary on or off.
    ///
    /// # Errors
    /// Returns the scheduler error when scheduling or cancelling fails; the
    /// flag is left unchanged in that case.
    pub async fn toggle_evening_summary(&self) -> Result<ReminderToggle, NotificationError> {
        let _persisting = self.persist_lock.lock().await;
        if self.is_evening_summary_enabled().await {
            self.stop_evening_summary().await?;
            self.write_flag(PreferenceFlag::EveningSummary, false).await;
            return Ok(ReminderToggle::Stopped);
        }

        if !self.ensure_notification_permission().await?.is_granted() {
            warn!("Evening summary stays off: notification permission not granted");
            return Ok(ReminderToggle::PermissionDenied);
        }

        let scheduled = usize::from(self.activate_evening_summary().await?.is_some());
        self.write_flag(PreferenceFlag::EveningSummary, true).await;
        Ok(ReminderToggle::Activated { scheduled })
    }

    /// Schedule today's two reminders unless something was already written
    /// today. Returns how many notifications were scheduled.
    pub async fn activate_daily_reminders(&self) -> Result<usize, NotificationError> {
        if self.entries.has_entry_today().await {
            info!("Gratitude already written today, no daily reminders scheduled");
            return Ok(0);
        }

        let requests = reminders::daily_reminder_requests(self.entries.today(), self.entries.zone(), &self.schedule);
        self.schedule_all(&requests).await?;
        Ok(requests.len())
    }

    /// Cancel every scheduled notification, not only the daily reminders.
    pub async fn stop_daily_reminders(&self) -> Result<(), NotificationError> {
        self.scheduler.cancel_all().await
    }

    /// Schedule a summary of today's entries for the evening. Returns the
    /// summary text, or `None` when nothing was written today.
    pub async fn activate_evening_summary(&self) -> Result<Option<String>, NotificationError> {
        let today = self.entries.entries_for_today().await;
        let Some(request) =
            reminders::evening_summary_request(self.entries.today(), self.entries.zone(), &self.schedule, &today)
        else {
            info!("No gratitude written today, no evening summary scheduled");
            return Ok(None);
        };

        self.schedule_all(std::slice::from_ref(&request)).await?;
        Ok(Some(request.body))
    }

    /// Cancel every scheduled notification, not only the evening summary.
    pub async fn stop_evening_summary(&self) -> Result<(), NotificationError> {
        self.scheduler.cancel_all().await
    }

    /// Current notification permission, without prompting
    pub async fn notification_permission(&self) -> Result<PermissionStatus, NotificationError> {
        self.scheduler.permission_status().await
    }

    /// Request notification permission unless it is already granted.
    pub async fn ensure_notification_permission(&self) -> Result<PermissionStatus, NotificationError> {
        let status = self.scheduler.permission_status().await?;
        if status.is_granted() {
            return Ok(status);
        }
        info!("Requesting notification permission (currently {:?})", status);
        self.scheduler.request_permission().await
    }

    async fn schedule_all(&self, requests: &[NotificationRequest]) -> Result<(), NotificationError> {
        for request in requests {
            self.scheduler
                .schedule_at(&request.title, &request.body, request.fire_at)
                .await?;
        }
        Ok(())
    }

    /// Callers hold `persist_lock`.
    async fn write_flag(&self, flag: PreferenceFlag, value: bool) {
        {
            let mut prefs = self.prefs.write().await;
            flag.set(&mut prefs, value);
        }
        self.persist_flag(flag, value).await;
    }

    async fn persist_flag(&self, flag: PreferenceFlag, value: bool) {
        if let Err(e) = self.storage.set(flag.key(), if value { "true" } else { "false" }).await {
            error!("Failed to persist preference {}: {}", flag.key(), e);
        }
    }
}
