//! Key-value slot repository for database operations.

use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::entities::kv_entry;

/// Repository for key-value slot operations.
pub struct KvEntryRepository;

impl KvEntryRepository {
    /// Get a single slot by key.
    pub async fn get<C>(conn: &C, key: &str) -> Result<Option<kv_entry::Model>, sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        kv_entry::Entity::find_by_id(key.to_string()).one(conn).await
    }

    /// Insert a slot or replace the value of an existing one.
    pub async fn upsert<C>(conn: &C, key: &str, value: &str) -> Result<(), sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        let slot = kv_entry::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        };

        kv_entry::Entity::insert(slot)
            .on_conflict(
                OnConflict::column(kv_entry::Column::Key)
                    .update_columns([kv_entry::Column::Value, kv_entry::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    /// Delete a slot by key. Deleting an absent key is not an error.
    pub async fn delete<C>(conn: &C, key: &str) -> Result<(), sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        kv_entry::Entity::delete_by_id(key.to_string()).exec(conn).await?;
        Ok(())
    }
}
