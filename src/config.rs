//! Configuration management for the gratitude journal
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_AFTERNOON_HOUR, DEFAULT_EVENING_SUMMARY_HOUR, DEFAULT_MIDDAY_HOUR,
    DEFAULT_SUGGESTION_COUNT, SUGGESTIONS,
};
use crate::reminders::ReminderSchedule;
use crate::utils::datetime::{self, DayZone};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "gratitude";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub time: TimeConfig,
    pub reminders: ReminderConfig,
    pub suggestions: SuggestionConfig,
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the SQLite database holding the key-value slots.
    /// Defaults to the platform data directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

/// Time configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Zone that decides what "today" means
    /// Options: "utc" (default), "local", or a fixed offset such as "+02:00"
    pub timezone: String,
}

/// Reminder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Hour of the first daily reminder
    pub midday_hour: u32,
    /// Hour of the second daily reminder
    pub afternoon_hour: u32,
    /// Hour of the evening summary
    pub evening_summary_hour: u32,
    /// Ask for notification permission when the app starts
    pub request_permission_on_start: bool,
}

/// Suggestion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Number of writing suggestions offered at once
    pub count: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Maximum level written to the log file
    pub level: String,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            timezone: "utc".to_string(),
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            midday_hour: DEFAULT_MIDDAY_HOUR,
            afternoon_hour: DEFAULT_AFTERNOON_HOUR,
            evening_summary_hour: DEFAULT_EVENING_SUMMARY_HOUR,
            request_permission_on_start: true,
        }
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_SUGGESTION_COUNT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl ReminderConfig {
    /// Reminder hours as a schedule the preference store understands
    pub fn schedule(&self) -> ReminderSchedule {
        ReminderSchedule {
            midday_hour: self.midday_hour,
            afternoon_hour: self.afternoon_hour,
            evening_summary_hour: self.evening_summary_hour,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("gratitude.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.day_zone()?;

        let hours = [
            ("midday_hour", self.reminders.midday_hour),
            ("afternoon_hour", self.reminders.afternoon_hour),
            ("evening_summary_hour", self.reminders.evening_summary_hour),
        ];
        for (name, hour) in hours {
            if hour > 23 {
                anyhow::bail!("{} must be between 0 and 23, got {}", name, hour);
            }
        }

        if self.suggestions.count == 0 || self.suggestions.count > SUGGESTIONS.len() {
            anyhow::bail!(
                "suggestions.count must be between 1 and {}, got {}",
                SUGGESTIONS.len(),
                self.suggestions.count
            );
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid logging level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    /// The configured day zone
    pub fn day_zone(&self) -> Result<DayZone> {
        self.time
            .timezone
            .parse::<DayZone>()
            .map_err(|e| anyhow::anyhow!("Invalid timezone '{}': {}", self.time.timezone, e))
    }

    /// Database path, falling back to the platform data directory
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.storage.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::get_data_dir()?.join("journal.db")),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Gratitude Journal Configuration File\n# Generated on {}\n\n",
            datetime::format_ymd(chrono::Local::now().date_naive())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }

    /// Get the directory holding the database and log file
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }
}
