mod commands;
mod dates;
mod render;
mod utils;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use smartcal_core::app::App;
use smartcal_core::config::SmartCalConfig;
use smartcal_core::seed::demo_events;
use smartcal_core::storage::FileStorage;
use smartcal_core::toast::ToastKind;
use smartcal_core::{EventKind, Priority};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::render::Render;

#[derive(Parser)]
#[command(name = "smartcal")]
#[command(about = "Plan your month, focus on your day")]
struct Cli {
    /// Keep state in this directory instead of the configured data_dir
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the current view (month grid or focus mode)
    Show {
        /// Date to show (YYYY-MM-DD, "tomorrow", "next fri", ...)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Render the month grid around a date
    Month {
        #[arg(short, long)]
        date: Option<String>,

        /// Months to move from the date (e.g. -1 for the previous month)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        shift: i32,
    },
    /// Render one day's agenda, ordered by start time
    Day {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Create an event (prompts for anything left out)
    New {
        title: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        /// Start time as HH:mm
        #[arg(short, long)]
        time: Option<String>,

        /// Length in minutes or as "1h30m"
        #[arg(long)]
        duration: Option<String>,

        #[arg(short, long)]
        priority: Option<Priority>,

        #[arg(long = "type")]
        kind: Option<EventKind>,
    },
    /// Move an event to another day
    Move { id: String, date: String },
    /// Delete an event
    Delete { id: String },
    /// Switch between month view and focus mode
    View { mode: ViewArg },
    /// Show or change the color theme
    Theme { action: Option<ThemeArg> },
    /// Ask for a suggested focus block
    Suggest {
        #[arg(short, long)]
        date: Option<String>,

        /// Create the suggested event right away
        #[arg(long)]
        accept: bool,
    },
    /// Print the active configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Month,
    Day,
    Toggle,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Toggle,
    Dark,
    Light,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = SmartCalConfig::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_path());

    let mut app = open_app(&data_dir, config.seed_demo_events)?;

    let result = match cli.command.unwrap_or(Commands::Show { date: None }) {
        Commands::Show { date } => commands::view::show(&app, date.as_deref()),
        Commands::Month { date, shift } => commands::month::run(&app, date.as_deref(), shift),
        Commands::Day { date } => commands::day::run(&app, date.as_deref()),
        Commands::New {
            title,
            date,
            time,
            duration,
            priority,
            kind,
        } => commands::new::run(
            &mut app,
            commands::new::NewEventArgs {
                title,
                date,
                time,
                duration,
                priority,
                kind,
            },
        ),
        Commands::Move { id, date } => commands::reschedule::run(&mut app, &id, &date),
        Commands::Delete { id } => commands::delete::run(&mut app, &id),
        Commands::View { mode } => commands::view::run(&mut app, mode),
        Commands::Theme { action } => commands::theme::run(&mut app, action),
        Commands::Suggest { date, accept } => {
            commands::suggest::run(&mut app, date.as_deref(), accept).await
        }
        Commands::Config => commands::config::run(&config, &data_dir),
    };

    print_toasts(&app);
    result
}

fn open_app(data_dir: &Path, seed_demo_events: bool) -> Result<App> {
    debug!(data_dir = %data_dir.display(), seed_demo_events, "opening calendar state");
    let storage = Arc::new(FileStorage::new(data_dir));

    let initial = if seed_demo_events {
        demo_events(dates::today())?
    } else {
        Vec::new()
    };

    Ok(App::load(storage, initial)?)
}

/// Errors are reported through the command result, so only print the rest.
fn print_toasts(app: &App) {
    let toasts: Vec<_> = app
        .toaster
        .toasts()
        .into_iter()
        .filter(|t| t.kind != ToastKind::Error)
        .collect();

    if toasts.is_empty() {
        return;
    }

    println!();
    for toast in toasts {
        println!("  {}", toast.render());
    }
}
