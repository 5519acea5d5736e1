//! Local key-value storage for journal data.
//!
//! This module defines the interface every persistence backend implements:
//! a flat set of string slots addressed by key. Two implementations ship
//! with the crate:
//! - [`SqliteStore`] - durable slots in a SQLite table managed through SeaORM
//! - [`MemoryStore`] - process-local slots, with failure injection for tests

use async_trait::async_trait;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Error types for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous key-value storage.
///
/// All operations are best-effort: callers decide whether a failure matters.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the slot for `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
