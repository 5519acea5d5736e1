//! Gratitude entries and the store that owns them.
//!
//! The [`EntryStore`] is the authoritative collection of [`GratitudeEntry`]
//! values for the running process. It persists the whole collection to one
//! key-value slot after every change and derives the per-day views the
//! journal screens need:
//! - entries for a given calendar day
//! - entries grouped by day, for calendar display
//! - whether anything was written today

pub mod entry;
pub mod store;

pub use entry::{validate_text, EntryId, GratitudeEntry};
pub use store::EntryStore;

/// Error types for journal operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JournalError {
    #[error("{}", crate::constants::ERROR_EMPTY_TEXT)]
    EmptyText,
}
