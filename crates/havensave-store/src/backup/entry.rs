use crate::backup::naming::parse_archive_name;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

/// One archive in the backup root, parsed from its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupEntry {
    pub date: NaiveDate,
    pub sequence: u32,
    pub version_tag: Option<String>,
    pub size_bytes: u64,
    pub archive_path: PathBuf,
}

impl BackupEntry {
    /// Build an entry for an existing archive file; `None` if the name does
    /// not follow the archive naming scheme
    pub fn from_path(path: &Path, size_bytes: u64) -> Option<Self> {
        let parsed = parse_archive_name(path.file_name()?.to_str()?)?;
        Some(Self {
            date: parsed.date,
            sequence: parsed.sequence,
            version_tag: parsed.version_tag,
            size_bytes,
            archive_path: path.to_path_buf(),
        })
    }

    pub fn file_name(&self) -> String {
        self.archive_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Listing order: newest date first, then ascending sequence
    pub fn listing_order(&self, other: &Self) -> Ordering {
        other
            .date
            .cmp(&self.date)
            .then(self.sequence.cmp(&other.sequence))
            .then_with(|| self.archive_path.cmp(&other.archive_path))
    }
}

impl fmt::Display for BackupEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  #{}  {:>10} bytes  {}",
            self.date.format("%Y-%m-%d"),
            self.sequence,
            self.size_bytes,
            self.file_name()
        )
    }
}
