mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rsvp_core::config::RsvpConfig;
use rsvp_core::store::FileStore;
use rsvp_core::{RsvpStatus, Tracker};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rsvp")]
#[command(about = "Create events and keep track of who's coming")]
struct Cli {
    /// Use this data directory instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log store activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the kinds of event you can create
    Types,
    /// List all events with an RSVP summary
    Events,
    /// Create an event from a template
    New {
        /// Template id (see `rsvp types`)
        event_type: String,

        /// Date, e.g. 2024-06-01
        #[arg(short, long)]
        date: String,

        /// Start time, e.g. 19:00
        #[arg(short, long)]
        time: String,

        /// Defaults to the template's usual venue
        #[arg(long)]
        venue: Option<String>,

        /// Defaults to the template's name
        #[arg(long)]
        name: Option<String>,
    },
    /// Show an event's details and guest list
    Show { event_id: String },
    /// Change an event's date, time, venue or description
    Edit {
        event_id: String,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        time: Option<String>,

        #[arg(long)]
        venue: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Record a guest's response (going, maybe, declined, no-response)
    Set {
        event_id: String,
        guest: String,
        status: RsvpStatus,
    },
    /// Show config and data paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = cli.data_dir;

    match cli.command {
        Commands::Types => commands::types::run(),
        Commands::Config => commands::config::run(data_dir.as_deref()),
        Commands::Events => with_tracker(data_dir, commands::events::run),
        Commands::New {
            event_type,
            date,
            time,
            venue,
            name,
        } => with_tracker(data_dir, |tracker| {
            commands::new::run(tracker, &event_type, date, time, venue, name)
        }),
        Commands::Show { event_id } => {
            with_tracker(data_dir, |tracker| commands::show::run(tracker, &event_id))
        }
        Commands::Edit {
            event_id,
            date,
            time,
            venue,
            description,
        } => with_tracker(data_dir, |tracker| {
            commands::edit::run(tracker, &event_id, date, time, venue, description)
        }),
        Commands::Set {
            event_id,
            guest,
            status,
        } => with_tracker(data_dir, |tracker| {
            commands::set::run(tracker, &event_id, &guest, status)
        }),
    }
}

/// Run a command against the store, saving whatever it changed before exit.
fn with_tracker<F>(data_dir: Option<PathBuf>, f: F) -> Result<()>
where
    F: FnOnce(&Tracker<FileStore>) -> Result<()>,
{
    let tracker = open_tracker(data_dir)?;
    let result = f(&tracker);
    tracker.flush().context("Failed to save changes")?;
    result
}

/// Filter used when `RUST_LOG` is unset. Targets are crate names: `rsvp` is this binary.
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "rsvp_core=debug,rsvp=debug" } else { "warn" }
}

fn init_logging(verbose: bool) {
    let default = default_filter(verbose);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

fn open_tracker(data_dir: Option<PathBuf>) -> Result<Tracker<FileStore>> {
    let tracker = match data_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "using data directory from --data-dir");
            Tracker::open_dir(&dir)
        }
        None => {
            let config = RsvpConfig::load().context("Failed to load config")?;
            tracing::debug!(dir = %config.data_path().display(), "using configured data directory");
            Tracker::open(&config)
        }
    };

    tracker.context("Failed to open data directory")
}
