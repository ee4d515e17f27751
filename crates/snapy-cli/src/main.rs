//! Snapy CLI
//!
//! Inspect the store's built-in catalog and effective configuration

use clap::{Parser, Subcommand};
use snapy_core::logging_facility::{self, Profile};
use snapy_core::StoreConfig;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "snapy")]
#[command(about = "Snapy - design editor repository store", long_about = None)]
struct Cli {
    /// Config file (falls back to $SNAPY_CONFIG, then defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format: pretty or json
    #[arg(long, global = true, default_value = "pretty")]
    log_format: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog templates as JSON
    Templates(commands::templates::TemplatesArgs),
    /// Show the AI generation quota of each plan
    Plans,
    /// Print the effective configuration as TOML
    Config,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::load(cli.config.as_deref())?;
    tracing::debug!(delete_policy = ?config.delete_policy, "configuration loaded");

    match cli.command {
        Commands::Templates(args) => commands::templates::execute(args, config),
        Commands::Plans => commands::plans::execute(&config),
        Commands::Config => commands::config::execute(&config),
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
