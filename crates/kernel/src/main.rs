//! navmenu
//!
//! Loads menu definitions and inspects the built menus.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use navmenu_kernel::config::Overrides;
use navmenu_kernel::{Config, MenuRegistry, cli};

/// Inspect navigation menus built from definition files.
#[derive(Parser, Debug)]
#[command(name = "navmenu")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Menu definition file (.toml, .json, .yaml); overrides NAVMENU_FILE.
    #[arg(long, short, global = true)]
    file: Option<PathBuf>,

    /// Treat validation warnings as failures; overrides NAVMENU_STRICT.
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List menu names.
    Names,
    /// Print a menu outline, or every menu.
    Tree { name: Option<String> },
    /// Print the first item with an id.
    Find { name: String, id: String },
    /// Find items by title (case-insensitive).
    Search { term: String },
    /// Check for duplicate ids and dead or ambiguous items.
    Validate,
    /// Print item counts and depth.
    Stats,
    /// Print every menu as JSON.
    Export,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load .env file if present
    dotenvy::dotenv().ok();

    let overrides = Overrides {
        definitions_path: args.file,
        strict: args.strict,
    };
    let config = Config::from_env_with(&overrides).context("failed to load configuration")?;
    init_tracing(&config.log_filter);

    let path = config
        .definitions_path
        .context("no definition file given; pass --file or set NAVMENU_FILE")?;

    let registry = MenuRegistry::new();
    let sections = registry
        .load_file(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    info!(path = %path.display(), sections, menus = registry.len(), "menu definitions loaded");

    let mut out = io::stdout().lock();
    match args.command {
        Command::Names => cli::cmd_names(&registry, &mut out),
        Command::Tree { name } => cli::cmd_tree(&registry, name.as_deref(), &mut out),
        Command::Find { name, id } => cli::cmd_find(&registry, &name, &id, &mut out),
        Command::Search { term } => cli::cmd_search(&registry, &term, &mut out),
        Command::Validate => cli::cmd_validate(&registry, config.strict, &mut out),
        Command::Stats => cli::cmd_stats(&registry, &mut out),
        Command::Export => cli::cmd_export(&registry, &mut out),
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
