//! Notification scheduler abstraction.
//!
//! The platform decides how a local notification is delivered; the journal
//! only needs to ask for permission, schedule a notification at an instant
//! and cancel everything it scheduled before.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod memory;

pub use memory::MemoryScheduler;

/// Common error types for scheduler operations.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Notification permission not granted")]
    PermissionDenied,

    #[error("Scheduling failed: {0}")]
    Schedule(String),
}

/// Whether the user allows local notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

/// A notification waiting to be scheduled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub fire_at: DateTime<Utc>,
}

/// A notification the scheduler accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledNotification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub fire_at: DateTime<Utc>,
}

/// Scheduler trait that every platform integration must implement.
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Current permission status, without prompting the user.
    async fn permission_status(&self) -> Result<PermissionStatus, NotificationError>;

    /// Prompt the user for permission and report the outcome.
    async fn request_permission(&self) -> Result<PermissionStatus, NotificationError>;

    /// Schedule a single notification, returning the platform identifier.
    async fn schedule_at(&self, title: &str, body: &str, at: DateTime<Utc>) -> Result<String, NotificationError>;

    /// Cancel every scheduled notification, whoever scheduled it.
    async fn cancel_all(&self) -> Result<(), NotificationError>;
}
