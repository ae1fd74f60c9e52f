//! Havensave CLI
//!
//! Command-line interface for save inspection, version comparison and backups

use clap::{Parser, Subcommand};
use havensave_core::logging_facility::{init, Profile};
use havensave_core::Settings;
use std::path::{Path, PathBuf};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "havensave")]
#[command(about = "Havensave - Space Haven save inspection and backups", long_about = None)]
struct Cli {
    /// Settings file (defaults to $HAVENSAVE_CONFIG, then ~/.havensave.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Human-readable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    /// JSON logging on stderr
    #[arg(long, global = true, conflicts_with = "verbose")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan a save document for identifiers missing from the catalog
    Scan(commands::scan::ScanArgs),
    /// Compare a save against a baseline save
    Compare(commands::compare::CompareArgs),
    /// Compare every save in a directory against one baseline
    CompareAll(commands::compare::CompareAllArgs),
    /// Backup operations (create, list, prune, restore)
    Backup(commands::backup::BackupArgs),
    /// Show metadata of a save folder
    Inspect(commands::inspect::InspectArgs),
    /// Settings file operations
    Config(commands::config::ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    } else if cli.log_json {
        init(Profile::Production);
    }

    if let Err(e) = run(cli.command, cli.config.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: Option<&Path>) -> commands::CommandResult {
    let settings = || Settings::resolve(config);
    match command {
        Commands::Scan(args) => commands::scan::execute(args, &settings()?),
        Commands::Compare(args) => commands::compare::execute(args, &settings()?),
        Commands::CompareAll(args) => commands::compare::execute_all(args, &settings()?),
        Commands::Backup(args) => commands::backup::execute(args, &settings()?),
        Commands::Inspect(args) => commands::inspect::execute(args),
        Commands::Config(args) => commands::config::execute(args, config),
    }
}
