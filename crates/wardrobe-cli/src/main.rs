//! Wardrobe CLI - Command-line interface for the wardrobe manager
//!
//! Provides commands for:
//! - Authentication against the hosted backend
//! - Managing wardrobe items (add, list, favorite, wear, delete)
//! - Composing and deleting looks
//! - Statistics over the collection
//! - JSON export and destructive import

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod output;

use commands::{
    auth::AuthCommand,
    items::ItemsCommand,
    looks::LooksCommand,
    stats::StatsCommand,
    transfer::{ExportCommand, ImportCommand},
};
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "wardrobe", version, about = "Personal wardrobe manager")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Authentication commands
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Manage wardrobe items
    #[command(subcommand)]
    Items(ItemsCommand),
    /// Manage looks (outfit combinations)
    #[command(subcommand)]
    Looks(LooksCommand),
    /// Show statistics over the collection
    Stats(StatsCommand),
    /// Export items and looks to a JSON snapshot
    Export(ExportCommand),
    /// Replace all data with a JSON snapshot
    Import(ImportCommand),
}

/// Log filter precedence: repeated `-v` flags win, otherwise the
/// configured `logging.level` applies
fn log_filter(verbose: u8, config_level: &str) -> String {
    match verbose {
        0 => config_level.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing; RUST_LOG still overrides everything
    let config_file = cli
        .config
        .as_deref()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(wardrobe_core::config::Config::default_path);
    let config = wardrobe_core::config::Config::load_or_default(&config_file);
    let filter = log_filter(cli.verbose, &config.logging.level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Auth(cmd) => cmd.execute(format, config_path).await,
        Commands::Items(cmd) => cmd.execute(format, config_path).await,
        Commands::Looks(cmd) => cmd.execute(format, config_path).await,
        Commands::Stats(cmd) => cmd.execute(format, config_path).await,
        Commands::Export(cmd) => cmd.execute(format, config_path).await,
        Commands::Import(cmd) => cmd.execute(format, config_path).await,
    }
}
