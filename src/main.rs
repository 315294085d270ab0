mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use booking_core::appointment::AppointmentId;
use booking_core::config::BookingConfig;
use booking_core::locale::{self, Translator};
use booking_core::store::AppointmentStore;
use booking_core::view::ViewMode;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "booking")]
#[command(about = "Keep a local appointment book: add, search, list and delete bookings")]
struct Cli {
    /// Language for this run (e.g. "en", "el")
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Read and write appointments in this directory instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an appointment. Missing fields are prompted for.
    Add {
        /// Client name
        #[arg(short, long)]
        name: Option<String>,

        /// Phone number
        #[arg(short, long)]
        phone: Option<String>,

        /// Service, e.g. "physiotherapy"
        #[arg(short, long)]
        service: Option<String>,

        /// Date and time (e.g., "2025-03-20T15:00")
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an appointment by id
    Delete {
        id: AppointmentId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show appointments
    List {
        /// Only show appointments whose name, phone or service contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// "list" or "calendar" (defaults to the configured view)
        #[arg(short, long)]
        view: Option<ViewMode>,
    },
    /// Show or change the interface language
    Lang {
        /// Locale code to switch to
        code: Option<String>,
    },
    /// Show configuration paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = BookingConfig::load()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let storage = config.storage();
    let code = locale::resolve_locale(
        cli.lang.as_deref(),
        locale::load_locale(&storage),
        config.locale.as_deref(),
    );
    let translator = Translator::new(&code);
    tracing::debug!(locale = translator.code(), data_dir = %storage.dir().display(), "starting");

    match cli.command {
        Commands::Add {
            name,
            phone,
            service,
            date,
        } => {
            let mut store = AppointmentStore::load(storage);
            let form = commands::add::Form {
                name,
                phone,
                service,
                date,
            };
            commands::add::run(&mut store, &translator, form)
        }
        Commands::Delete { id, yes } => {
            let mut store = AppointmentStore::load(storage);
            commands::delete::run(&mut store, &translator, id, yes)
        }
        Commands::List { search, view } => {
            let store = AppointmentStore::load(storage);
            let view = view.unwrap_or(config.default_view);
            commands::list::run(&store, &translator, search.as_deref().unwrap_or(""), view)
        }
        Commands::Lang { code } => {
            let mut storage = storage;
            commands::lang::run(&mut storage, &translator, code.as_deref())
        }
        Commands::Config => commands::config::run(&config, &translator),
    }
}
