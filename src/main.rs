use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jiff::Timestamp;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use addonstore::config::Config;
use addonstore::registry::{self, MemoryRegistry};
use addonstore::{catalog, commands, Channel};

/// Inspect an add-on store catalog and installed add-ons
#[derive(Parser, Debug)]
#[command(name = "addonstore")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog JSON file
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// JSON list of installed add-on manifests
    #[arg(long, value_name = "PATH")]
    installed: Option<PathBuf>,

    /// Host API version of the catalog, e.g. 2023.1, or "latest"
    #[arg(long, value_name = "VERSION")]
    api_version: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog entries
    List {
        /// Channel to list, or "all"
        #[arg(long, default_value = "all")]
        channel: Channel,

        /// Include entries flagged as legacy
        #[arg(long)]
        include_legacy: bool,
    },
    /// Show one entry and its installed counterpart
    Show {
        /// Add-on identifier (case-insensitive)
        id: String,

        #[arg(long, default_value = "all")]
        channel: Channel,
    },
    /// Check a downloaded package against the catalog checksum
    Verify {
        /// Add-on identifier (case-insensitive)
        id: String,

        /// Package file
        file: PathBuf,

        #[arg(long, default_value = "all")]
        channel: Channel,
    },
}

/// Load the catalog and run one subcommand.
///
/// Every failure here is an [`addonstore::Error`], so it maps to its own
/// exit code.
fn execute(command: Command, config: &Config) -> addonstore::Result<serde_json::Value> {
    let snapshot = catalog::load_snapshot(&config.catalog_path, config.catalog_api_version()?)?;
    if snapshot.is_expired(Timestamp::now(), config.cache_ttl()) {
        warn!("Catalog snapshot from {} is older than {}s", snapshot.fetched_at, config.cache_ttl_secs);
    }

    match command {
        Command::List {
            channel,
            include_legacy,
        } => commands::list(&snapshot, channel, include_legacy),
        Command::Show { id, channel } => {
            let installed = match &config.installed_path {
                Some(path) => registry::fs::load(path)?,
                None => MemoryRegistry::new(),
            };
            commands::show(&snapshot, &installed, channel, &id)
        }
        Command::Verify { id, file, channel } => commands::verify(&snapshot, channel, &id, &file),
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    // Load configuration
    let config = Config::load(
        args.config.as_ref(),
        args.catalog.as_ref(),
        args.installed.as_ref(),
        args.api_version.as_deref(),
    )?;

    info!("Configuration loaded: catalog={}", config.catalog_path.display());

    match execute(args.command, &config) {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{}", e);
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    let args = Args::parse();
    run(args)
}
