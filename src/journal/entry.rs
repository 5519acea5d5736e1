use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::JournalError;
use crate::utils::datetime::DayZone;

/// Opaque identifier of a gratitude entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single gratitude note. Never modified after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GratitudeEntry {
    pub id: EntryId,
    pub text: String,
    #[serde(alias = "date")]
    pub created_at: DateTime<Utc>,
}

impl GratitudeEntry {
    /// Build an entry with a fresh id, rejecting blank text.
    pub fn new(text: &str, created_at: DateTime<Utc>) -> Result<Self, JournalError> {
        let text = validate_text(text)?;
        Ok(Self {
            id: EntryId::generate(),
            text: text.to_string(),
            created_at,
        })
    }

    /// Calendar day this entry belongs to in `zone`
    pub fn day(&self, zone: DayZone) -> NaiveDate {
        zone.day_of(self.created_at)
    }
}

/// Reject empty or whitespace-only text.
///
/// The text is returned unchanged; surrounding whitespace is the user's.
pub fn validate_text(text: &str) -> Result<&str, JournalError> {
    if text.trim().is_empty() {
        return Err(JournalError::EmptyText);
    }
    Ok(text)
}
