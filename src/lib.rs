//! Gratitude - the data layer of a local-first gratitude journal
//!
//! This library keeps a list of short gratitude notes, groups them by day,
//! stores a few user preferences and schedules local reminder notifications.
//! Presentation is left to the caller, which consumes the stores' read/write
//! contract.
//!
//! # Modules
//!
//! * [`app`] - Start-up wiring of the stores
//! * [`config`] - Application configuration management
//! * [`journal`] - Gratitude entries and the entry store
//! * [`preferences`] - Preference flags and reminder switches
//! * [`notifications`] - Notification scheduler abstraction
//! * [`storage`] - Key-value persistence
//! * [`utils`] - Utility functions and helpers

/// Start-up wiring of the stores
pub mod app;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Gratitude entries and their store
pub mod journal;

/// Logging bootstrap
pub mod logger;

/// Notification scheduler abstraction
pub mod notifications;

/// Preference flags and reminder switches
pub mod preferences;

/// Reminder planning
pub mod reminders;

/// Repository layer for database operations
pub mod repositories;

/// Key-value persistence
pub mod storage;

/// Writing suggestions
pub mod suggestions;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use app::AppContext;
pub use journal::{EntryId, EntryStore, GratitudeEntry, JournalError};
pub use preferences::{PreferenceFlag, PreferenceStore, Preferences, ReminderToggle};
