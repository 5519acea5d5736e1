use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;

use gratitude::config::Config;
use gratitude::constants::{
    DEFAULT_DRAFT, EMPTY_DAY_HINT, EMPTY_DAY_MESSAGE, ERROR_DAILY_REMINDERS_FAILED, ERROR_ENTRY_NOT_FOUND,
    ERROR_EVENING_SUMMARY_FAILED, ERROR_PERMISSION_REQUIRED, SUCCESS_DAILY_REMINDERS_OFF, SUCCESS_DAILY_REMINDERS_ON,
    SUCCESS_ENTRIES_CLEARED, SUCCESS_ENTRY_ADDED, SUCCESS_ENTRY_DELETED, SUCCESS_EVENING_SUMMARY_OFF,
    SUCCESS_EVENING_SUMMARY_ON,
};
use gratitude::notifications::MemoryScheduler;
use gratitude::utils::datetime::{self, DayZone};
use gratitude::{logger, suggestions, AppContext, EntryId, GratitudeEntry, ReminderToggle};

#[derive(Parser)]
#[command(name = "gratitude", version, about = "Record what you're grateful for, one day at a time")]
struct Cli {
    /// Use this configuration file instead of the default lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a new gratitude
    Add {
        /// What you are grateful for
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show today's gratitudes
    Today,
    /// Show every gratitude, newest first
    List,
    /// Show the gratitudes of one day
    Day {
        /// Date in YYYY-MM-DD format
        date: String,
    },
    /// Show gratitudes grouped by day
    Calendar,
    /// Delete a gratitude by id
    Delete { id: String },
    /// Delete every gratitude
    Clear,
    /// Offer writing suggestions
    Suggest {
        /// Number of suggestions (defaults to the configured count)
        #[arg(long)]
        count: Option<usize>,
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show current settings
    Settings,
    /// Flip a setting
    Toggle { setting: Setting },
    /// Write a default configuration file
    InitConfig { path: Option<PathBuf> },
}

#[derive(Clone, Copy, ValueEnum)]
enum Setting {
    DarkMode,
    DailyReminder,
    EveningSummary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Command::InitConfig { path } => return init_config(path),
        command => command,
    };

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    let scheduler = Arc::new(MemoryScheduler::granted());
    let app = AppContext::open(config, scheduler).await?;

    run(&app, command).await
}

async fn run(app: &AppContext, command: Command) -> Result<()> {
    let zone = app.entries.zone();

    match command {
        Command::Add { text } => {
            let entry = app.entries.add(&text.join(" ")).await?;
            println!("{} ({})", SUCCESS_ENTRY_ADDED, entry.id);
        }
        Command::Today => print_day(&app.entries.entries_for_today().await, zone),
        Command::List => {
            for entry in app.entries.entries().await {
                print_entry(&entry, zone, true);
            }
        }
        Command::Day { date } => {
            let date = datetime::parse_date(&date).with_context(|| format!("Invalid date '{}'", date))?;
            print_day(&app.entries.entries_for_date(date).await, zone);
        }
        Command::Calendar => {
            for (day, entries) in app.entries.grouped_by_date().await {
                println!("{} ({})", datetime::format_ymd(day), entries.len());
                for entry in &entries {
                    print_entry(entry, zone, false);
                }
            }
        }
        Command::Delete { id } => {
            if app.entries.delete(&EntryId::from(id)).await {
                println!("{}", SUCCESS_ENTRY_DELETED);
            } else {
                println!("{}", ERROR_ENTRY_NOT_FOUND);
            }
        }
        Command::Clear => {
            app.entries.clear().await;
            println!("{}", SUCCESS_ENTRIES_CLEARED);
        }
        Command::Suggest { count, seed } => {
            let count = count.unwrap_or(app.config.suggestions.count);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            for suggestion in suggestions::pick(&mut rng, count) {
                println!("{}", suggestions::append(DEFAULT_DRAFT, suggestion));
            }
        }
        Command::Settings => {
            let prefs = app.preferences.preferences().await;
            println!("Dark mode:        {}", on_off(prefs.dark_mode));
            println!("Daily reminders:  {}", on_off(prefs.daily_reminder_enabled));
            println!("Evening summary:  {}", on_off(prefs.evening_summary_enabled));
            println!("Day zone:         {}", zone);
        }
        Command::Toggle { setting } => toggle(app, setting).await,
        Command::InitConfig { .. } => unreachable!("init-config is handled before the journal is opened"),
    }

    Ok(())
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::get_default_config_path()?,
    };
    Config::generate_default_config(path)
}

async fn toggle(app: &AppContext, setting: Setting) {
    let reminders = &app.config.reminders;
    match setting {
        Setting::DarkMode => {
            let on = app.preferences.toggle_dark_mode().await;
            println!("Dark mode {}", on_off(on));
        }
        Setting::DailyReminder => match app.preferences.toggle_daily_reminder().await {
            Ok(ReminderToggle::Activated { scheduled }) => println!(
                "{}: reminders at {}:00 and {}:00 ({} scheduled today)",
                SUCCESS_DAILY_REMINDERS_ON, reminders.midday_hour, reminders.afternoon_hour, scheduled
            ),
            Ok(ReminderToggle::Stopped) => println!("{}", SUCCESS_DAILY_REMINDERS_OFF),
            Ok(ReminderToggle::PermissionDenied) => println!("{}", ERROR_PERMISSION_REQUIRED),
            Err(e) => eprintln!("{}: {}", ERROR_DAILY_REMINDERS_FAILED, e),
        },
        Setting::EveningSummary => match app.preferences.toggle_evening_summary().await {
            Ok(ReminderToggle::Activated { .. }) => println!(
                "{}: summary at {}:00",
                SUCCESS_EVENING_SUMMARY_ON, reminders.evening_summary_hour
            ),
            Ok(ReminderToggle::Stopped) => println!("{}", SUCCESS_EVENING_SUMMARY_OFF),
            Ok(ReminderToggle::PermissionDenied) => println!("{}", ERROR_PERMISSION_REQUIRED),
            Err(e) => eprintln!("{}: {}", ERROR_EVENING_SUMMARY_FAILED, e),
        },
    }
}

fn print_day(entries: &[GratitudeEntry], zone: DayZone) {
    if entries.is_empty() {
        println!("{}", EMPTY_DAY_MESSAGE);
        println!("{}", EMPTY_DAY_HINT);
        return;
    }
    for entry in entries {
        print_entry(entry, zone, false);
    }
}

fn print_entry(entry: &GratitudeEntry, zone: DayZone, with_date: bool) {
    let when = if with_date {
        format!("{} {}", datetime::format_ymd(entry.day(zone)), zone.format_time(entry.created_at))
    } else {
        zone.format_time(entry.created_at)
    };
    println!("  {}  {}  [{}]", when, entry.text, entry.id);
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
