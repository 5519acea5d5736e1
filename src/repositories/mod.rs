//! Repository layer for database operations.
//!
//! Repositories encapsulate the SeaORM queries behind the storage layer,
//! keeping entities as pure data models.

pub mod kv_entry;

pub use kv_entry::KvEntryRepository;
