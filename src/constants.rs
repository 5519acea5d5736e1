//! Constants used throughout the application
//!
//! This module centralizes storage keys, notification texts, user-facing
//! messages and other constant values so the stores and the front end agree
//! on them.

// Storage Keys
pub const KEY_GRATITUDES: &str = "gratitudes";
pub const KEY_DARK_MODE: &str = "isDarkMode";
pub const KEY_DAILY_REMINDER: &str = "isDailyReminderOn";
pub const KEY_EVENING_SUMMARY: &str = "isEveningSummaryOn";

// Notification Content
pub const REMINDER_TITLE: &str = "Gratitude Reminder";
pub const REMINDER_MIDDAY_BODY: &str = "Take a moment to note what you’re grateful for today.";
pub const REMINDER_AFTERNOON_BODY: &str = "Have you added something you’re grateful for? Don’t forget!";
pub const SUMMARY_TITLE: &str = "Gratitude Summary";
pub const SUMMARY_PREFIX: &str = "Today, you were grateful for: ";
pub const SUMMARY_SEPARATOR: &str = ", ";

// Default Reminder Times (hour of day in the configured zone)
pub const DEFAULT_MIDDAY_HOUR: u32 = 12;
pub const DEFAULT_AFTERNOON_HOUR: u32 = 18;
pub const DEFAULT_EVENING_SUMMARY_HOUR: u32 = 21;

// Success Messages
pub const SUCCESS_ENTRY_ADDED: &str = "✅ Gratitude added";
pub const SUCCESS_ENTRY_DELETED: &str = "✅ Gratitude deleted";
pub const SUCCESS_ENTRIES_CLEARED: &str = "✅ All gratitudes cleared";
pub const SUCCESS_DAILY_REMINDERS_ON: &str = "✅ Daily Reminders Activated";
pub const SUCCESS_DAILY_REMINDERS_OFF: &str = "✅ Daily Reminders Stopped: no more daily reminders will be sent.";
pub const SUCCESS_EVENING_SUMMARY_ON: &str = "✅ Evening Summary Activated";
pub const SUCCESS_EVENING_SUMMARY_OFF: &str = "✅ Evening Summary Stopped: no more evening summaries will be sent.";

// Error Messages
pub const ERROR_EMPTY_TEXT: &str = "Please enter some text.";
pub const ERROR_ENTRY_NOT_FOUND: &str = "❌ No gratitude with that id";
pub const ERROR_PERMISSION_REQUIRED: &str =
    "❌ Permission Required: to activate notifications, please enable notifications in your device settings.";
pub const ERROR_DAILY_REMINDERS_FAILED: &str = "❌ Failed to toggle daily reminders";
pub const ERROR_EVENING_SUMMARY_FAILED: &str = "❌ Failed to toggle evening summary";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const EMPTY_DAY_MESSAGE: &str = "No gratitude entries for this day!";
pub const EMPTY_DAY_HINT: &str = "Take a moment to reflect on what you're grateful for and start adding entries.";

// Writing Suggestions
/// Draft text a new entry starts from
pub const DEFAULT_DRAFT: &str = "I'm grateful for ";
/// How many suggestions are offered at once
pub const DEFAULT_SUGGESTION_COUNT: usize = 5;

pub const SUGGESTIONS: [&str; 20] = [
    "the sunshine today",
    "a delicious meal",
    "spending time with family",
    "good health",
    "a productive day",
    "the support of friends",
    "a good night's sleep",
    "a fun workout",
    "learning something new",
    "kindness from others",
    "my favorite book",
    "the smell of rain",
    "a relaxing evening",
    "small acts of kindness",
    "a moment of peace",
    "a successful project",
    "a great conversation",
    "having a warm home",
    "clean water to drink",
    "the beauty of nature",
];
