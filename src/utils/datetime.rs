//! Date and time utility functions
//!
//! Everything that decides what "today" or "a calendar day" means goes through
//! this module: the [`DayZone`] the user configured and the [`Clock`] the
//! stores were built with.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

/// Calendar day format used for grouping keys and date arguments
pub const JOURNAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, JOURNAL_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(JOURNAL_DATE_FORMAT).to_string()
}

/// Time zone in which instants are folded into calendar days.
///
/// Entries are stored as UTC instants; the zone decides which day an entry
/// belongs to and where the wall-clock reminder times land.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayZone {
    /// The host's local time zone
    Local,
    /// Coordinated universal time
    #[default]
    Utc,
    /// A fixed offset from UTC, e.g. `+02:00`
    Fixed(FixedOffset),
}

impl DayZone {
    /// Calendar day on which `instant` falls in this zone
    pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            DayZone::Local => instant.with_timezone(&Local).date_naive(),
            DayZone::Utc => instant.date_naive(),
            DayZone::Fixed(offset) => instant.with_timezone(offset).date_naive(),
        }
    }

    /// The instant at which the wall clock of this zone shows `time` on `day`.
    ///
    /// Returns `None` when that wall-clock time does not exist (a DST gap).
    /// When it exists twice the earlier instant is used.
    pub fn instant_at(&self, day: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
        let naive = day.and_time(time);
        match self {
            DayZone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            DayZone::Utc => Some(Utc.from_utc_datetime(&naive)),
            DayZone::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    /// Format `instant` as wall-clock `HH:MM` in this zone
    pub fn format_time(&self, instant: DateTime<Utc>) -> String {
        match self {
            DayZone::Local => instant.with_timezone(&Local).format("%H:%M").to_string(),
            DayZone::Utc => instant.format("%H:%M").to_string(),
            DayZone::Fixed(offset) => instant.with_timezone(offset).format("%H:%M").to_string(),
        }
    }
}

impl FromStr for DayZone {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(DayZone::Local),
            "utc" | "z" => Ok(DayZone::Utc),
            other => other.parse::<FixedOffset>().map(DayZone::Fixed),
        }
    }
}

impl fmt::Display for DayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayZone::Local => write!(f, "local"),
            DayZone::Utc => write!(f, "utc"),
            DayZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Today's date in `zone`
    fn today(&self, zone: DayZone) -> NaiveDate {
        zone.day_of(self.now())
    }
}

/// Wall clock of the host
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to an instant that only moves when told to
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(now) }
    }

    /// Move the clock to `now`
    pub fn set(&self, now: DateTime<Utc>) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = now;
        }
    }

    /// Advance the clock by `delta`
    pub fn advance(&self, delta: chrono::Duration) {
        if let Ok(mut guard) = self.now.lock() {
            *guard += delta;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.lock().map(|guard| *guard).unwrap_or_else(|poisoned| *poisoned.into_inner())
    }
}
