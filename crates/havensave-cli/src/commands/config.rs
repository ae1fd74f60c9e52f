//! Config command
//!
//! Usage: havensave config <show|init>

use super::CommandResult;
use clap::{Args, Subcommand};
use havensave_core::config::CONFIG_ENV;
use havensave_core::Settings;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective settings as TOML
    Show,
    /// Write default settings to the settings file if none exists yet
    Init,
}

/// Execute config command
pub fn execute(args: ConfigArgs, config_path: Option<&Path>) -> CommandResult {
    match args.command {
        ConfigCommand::Show => {
            let settings = Settings::resolve(config_path)?;
            print!("{}", toml::to_string_pretty(&settings)?);
        }
        ConfigCommand::Init => {
            let path = config_path
                .map(Path::to_path_buf)
                .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
                .unwrap_or_else(Settings::default_path);
            if !Settings::is_first_run(&path) {
                println!("Settings already exist at {}", path.display());
                return Ok(());
            }
            Settings::default().save_to_file(&path)?;
            println!("Settings written to {}", path.display());
        }
    }
    Ok(())
}
