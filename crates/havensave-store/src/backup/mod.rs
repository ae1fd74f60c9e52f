//! Backup archives of save folders.
//!
//! Archives live flat in one backup root and are named
//! `{YYYYMMDD}_{N}-savegames[-v{version}].zip`. The name is the only index:
//! listing parses names into [`BackupEntry`] values and ignores anything else,
//! including the `.tmp` files of writes in progress.

pub mod archive;
pub mod atomic;
pub mod clock;
pub mod entry;
pub mod manager;
pub mod naming;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::BackupEntry;
pub use manager::{BackupManager, BackupOutcome, PruneReport};
