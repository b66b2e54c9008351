//! chanwatch CLI
//!
//! Manage the keyword stores and dry-run channel posts without a bot.

use chanwatch_core::logging_facility;
use chanwatch_engine::{Monitor, MonitorConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "chanwatch")]
#[command(about = "chanwatch - Telegram channel keyword monitor", long_about = None)]
struct Cli {
    /// Path to the TOML config file (defaults to $CHANWATCH_CONFIG or ./chanwatch.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Keyword store operations
    Keyword(commands::keyword::KeywordArgs),
    /// Channel post operations
    Post(commands::post::PostArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = MonitorConfig::load(cli.config.as_deref())?;
    logging_facility::init(config.logging.profile);

    let mut monitor = Monitor::open(&config.storage);

    match cli.command {
        Commands::Keyword(args) => commands::keyword::execute(args, &mut monitor),
        Commands::Post(args) => commands::post::execute(args, &monitor),
    }
}
