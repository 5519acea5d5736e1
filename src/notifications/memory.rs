use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{NotificationError, NotificationScheduler, PermissionStatus, ScheduledNotification};

/// Scheduler that keeps notifications in memory and logs them.
///
/// Used by the command-line front end, where there is no platform to hand
/// notifications to, and by tests to inspect what was scheduled.
#[derive(Debug)]
pub struct MemoryScheduler {
    permission: Mutex<PermissionStatus>,
    grant_on_request: bool,
    fail_scheduling: AtomicBool,
    scheduled: Mutex<Vec<ScheduledNotification>>,
}

impl MemoryScheduler {
    /// Scheduler whose permission is already granted.
    pub fn granted() -> Self {
        Self::with_permission(PermissionStatus::Granted, true)
    }

    /// Scheduler that starts in `permission` and moves to granted on request
    /// only when `grant_on_request` is set.
    pub fn with_permission(permission: PermissionStatus, grant_on_request: bool) -> Self {
        Self {
            permission: Mutex::new(permission),
            grant_on_request,
            fail_scheduling: AtomicBool::new(false),
            scheduled: Mutex::new(Vec::new()),
        }
    }

    /// Make every subsequent `schedule_at` fail.
    pub fn set_fail_scheduling(&self, fail: bool) {
        self.fail_scheduling.store(fail, Ordering::SeqCst);
    }

    /// Notifications currently scheduled, oldest first.
    pub async fn scheduled(&self) -> Vec<ScheduledNotification> {
        self.scheduled.lock().await.clone()
    }
}

impl Default for MemoryScheduler {
    fn default() -> Self {
        Self::granted()
    }
}

#[async_trait]
impl NotificationScheduler for MemoryScheduler {
    async fn permission_status(&self) -> Result<PermissionStatus, NotificationError> {
        Ok(*self.permission.lock().await)
    }

    async fn request_permission(&self) -> Result<PermissionStatus, NotificationError> {
        let mut permission = self.permission.lock().await;
        if self.grant_on_request {
            *permission = PermissionStatus::Granted;
        } else if *permission == PermissionStatus::Undetermined {
            *permission = PermissionStatus::Denied;
        }
        Ok(*permission)
    }

    async fn schedule_at(&self, title: &str, body: &str, at: DateTime<Utc>) -> Result<String, NotificationError> {
        if self.fail_scheduling.load(Ordering::SeqCst) {
            return Err(NotificationError::Schedule("scheduler unavailable".to_string()));
        }
        if !self.permission.lock().await.is_granted() {
            return Err(NotificationError::PermissionDenied);
        }

        let id = Uuid::new_v4().to_string();
        info!("Scheduled notification {} '{}' at {}", id, title, at.to_rfc3339());
        self.scheduled.lock().await.push(ScheduledNotification {
            id: id.clone(),
            title: title.to_string(),
            body: body.to_string(),
            fire_at: at,
        });
        Ok(id)
    }

    async fn cancel_all(&self) -> Result<(), NotificationError> {
        let mut scheduled = self.scheduled.lock().await;
        info!("Cancelling {} scheduled notification(s)", scheduled.len());
        scheduled.clear();
        Ok(())
    }
}
