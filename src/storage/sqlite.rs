use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use std::time::Duration;

use super::{KeyValueStore, StorageError};
use crate::entities::kv_entry;
use crate::repositories::KvEntryRepository;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Durable key-value store backed by a single SQLite table
#[derive(Clone)]
pub struct SqliteStore {
    conn: DatabaseConnection,
}

impl SqliteStore {
    /// Open (creating if needed) the database file at `path`
    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let url = format!("sqlite://{}?mode=rwc", path.display());
        info!("Opening journal database at {}", path.display());
        Self::connect(ConnectOptions::new(url)).await
    }

    /// Open a database that lives only as long as this store
    pub async fn open_in_memory() -> Result<Self, StorageError> {
        let mut options = ConnectOptions::new(IN_MEMORY_URL);
        // Every pooled connection to `:memory:` is its own database; keep exactly one alive
        options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(Duration::from_secs(u32::MAX as u64))
            .max_lifetime(Duration::from_secs(u32::MAX as u64));
        Self::connect(options).await
    }

    async fn connect(mut options: ConnectOptions) -> Result<Self, StorageError> {
        options.sqlx_logging(false);
        let conn = Database::connect(options).await?;
        let store = Self { conn };
        store.init_schema().await?;
        Ok(store)
    }

    /// Create the slot table if it does not exist yet
    async fn init_schema(&self) -> Result<(), StorageError> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut statement = schema.create_table_from_entity(kv_entry::Entity);
        statement.if_not_exists();

        self.conn.execute(backend.build(&statement)).await?;
        debug!("Key-value schema ready");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(KvEntryRepository::get(&self.conn, key).await?.map(|slot| slot.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        KvEntryRepository::upsert(&self.conn, key, value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        KvEntryRepository::delete(&self.conn, key).await?;
        Ok(())
    }
}
