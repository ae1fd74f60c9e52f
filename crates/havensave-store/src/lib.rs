//! Havensave Store - filesystem side of save management
//!
//! Provides:
//! - Dated, sequence-numbered backup archives with retention pruning
//! - Temp-then-rename archive writes so partial archives are never listed
//! - Save folder inspection (`save/game`, `save/info`, binary companions)

pub mod backup;
pub mod errors;
pub mod save_folder;

// Re-export key types
pub use backup::{BackupEntry, BackupManager, BackupOutcome, Clock, FixedClock, PruneReport, SystemClock};
pub use errors::Result;
pub use save_folder::{folder_for_game, SaveFolderInfo};
