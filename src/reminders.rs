//! Reminder planning.
//!
//! Pure functions that turn the reminder schedule and today's entries into
//! the notification requests handed to the platform scheduler.

use chrono::{NaiveDate, NaiveTime};

use crate::constants::{
    DEFAULT_AFTERNOON_HOUR, DEFAULT_EVENING_SUMMARY_HOUR, DEFAULT_MIDDAY_HOUR, REMINDER_AFTERNOON_BODY,
    REMINDER_MIDDAY_BODY, REMINDER_TITLE, SUMMARY_PREFIX, SUMMARY_SEPARATOR, SUMMARY_TITLE,
};
use crate::journal::GratitudeEntry;
use crate::notifications::NotificationRequest;
use crate::utils::datetime::DayZone;

/// Hours of day, in the configured zone, at which reminders fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSchedule {
    pub midday_hour: u32,
    pub afternoon_hour: u32,
    pub evening_summary_hour: u32,
}

impl Default for ReminderSchedule {
    fn default() -> Self {
        Self {
            midday_hour: DEFAULT_MIDDAY_HOUR,
            afternoon_hour: DEFAULT_AFTERNOON_HOUR,
            evening_summary_hour: DEFAULT_EVENING_SUMMARY_HOUR,
        }
    }
}

/// The two daily reminders for `day`.
///
/// Reminders whose wall-clock time does not exist on `day` are skipped.
pub fn daily_reminder_requests(day: NaiveDate, zone: DayZone, schedule: &ReminderSchedule) -> Vec<NotificationRequest> {
    [
        (schedule.midday_hour, REMINDER_MIDDAY_BODY),
        (schedule.afternoon_hour, REMINDER_AFTERNOON_BODY),
    ]
    .into_iter()
    .filter_map(|(hour, body)| request_at(day, zone, hour, REMINDER_TITLE, body))
    .collect()
}

/// The evening summary of `entries` for `day`, or `None` when there is
/// nothing to summarize.
pub fn evening_summary_request(
    day: NaiveDate,
    zone: DayZone,
    schedule: &ReminderSchedule,
    entries: &[GratitudeEntry],
) -> Option<NotificationRequest> {
    let body = summary_body(entries)?;
    request_at(day, zone, schedule.evening_summary_hour, SUMMARY_TITLE, &body)
}

/// "Today, you were grateful for: a, b, c"
pub fn summary_body(entries: &[GratitudeEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let texts: Vec<&str> = entries.iter().map(|entry| entry.text.as_str()).collect();
    Some(format!("{}{}", SUMMARY_PREFIX, texts.join(SUMMARY_SEPARATOR)))
}

fn request_at(day: NaiveDate, zone: DayZone, hour: u32, title: &str, body: &str) -> Option<NotificationRequest> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
    let fire_at = zone.instant_at(day, time)?;
    Some(NotificationRequest {
        title: title.to_string(),
        body: body.to_string(),
        fire_at,
    })
}
