//! Inspect command
//!
//! Usage: havensave inspect <FOLDER>

use super::CommandResult;
use clap::Args;
use havensave_store::SaveFolderInfo;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Save folder (the one containing `save/`)
    pub folder: PathBuf,
}

/// Execute inspect command
pub fn execute(args: InspectArgs) -> CommandResult {
    if !args.folder.is_dir() {
        return Err(format!("not a directory: {}", args.folder.display()).into());
    }
    let info = SaveFolderInfo::inspect(&args.folder);
    let yes_no = |b: bool| if b { "yes" } else { "no" };

    println!("{}", info.display_name());
    println!("  valid save:     {}", yes_no(info.is_valid_save()));
    println!("  version:        {}", info.version.as_deref().unwrap_or("-"));
    println!("  in-game date:   {}", info.date.as_deref().unwrap_or("-"));
    println!("  saved at:       {}", info.real_time_date.as_deref().unwrap_or("-"));
    println!("  save/game:      {}", yes_no(info.game_file_exists));
    println!("  save/info:      {}", yes_no(info.info_file_exists));
    println!("  balanced.bin:   {}", yes_no(info.balanced_bin_exists));
    println!("  stats.bin:      {}", yes_no(info.stats_bin_exists));
    Ok(())
}
