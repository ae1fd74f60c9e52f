//! Atomic write primitives
//!
//! Uses temp→rename pattern so a partially written archive never carries
//! its final name

use crate::errors::{io_error, Result};
use havensave_core::errors::ExError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const TEMP_SUFFIX: &str = ".tmp";

/// `{target}.tmp`, next to the target
pub fn temp_path_for(target: &Path) -> PathBuf {
    let mut name: OsString = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(TEMP_SUFFIX);
    target.with_file_name(name)
}

/// Create `target` through a temp file.
///
/// `write` fills the temp file; on success the file is synced and renamed to
/// `target`. On any failure the temp file is removed and `target` is left
/// untouched. `map_err` turns I/O failures of the surrounding steps into the
/// caller's error kind.
pub fn write_atomically<F, M>(target: &Path, write: F, map_err: M) -> Result<()>
where
    F: FnOnce(File) -> Result<File>,
    M: Fn(std::io::Error) -> ExError,
{
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_backup_dir", e))?;
    }

    let temp_path = temp_path_for(target);
    let outcome = File::create(&temp_path)
        .map_err(&map_err)
        .and_then(write)
        .and_then(|file| file.sync_all().map_err(&map_err))
        .and_then(|()| fs::rename(&temp_path, target).map_err(&map_err));

    if outcome.is_err() {
        // best effort; the original error is what matters
        let _ = fs::remove_file(&temp_path);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use havensave_core::errors::ExErrorKind;
    use std::io::Write;
    use tempfile::TempDir;

    fn tmp_count(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|s| s.ends_with(TEMP_SUFFIX))
                    .unwrap_or(false)
            })
            .count()
    }

    #[test]
    fn test_write_atomically() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("a.zip");

        write_atomically(
            &target,
            |mut f| {
                f.write_all(b"hello").map_err(|e| io_error("t", e))?;
                Ok(f)
            },
            |e| io_error("t", e),
        )
        .unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"hello");
        assert_eq!(tmp_count(temp_dir.path()), 0);
    }

    #[test]
    fn test_failed_write_leaves_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("b.zip");

        let err = write_atomically(
            &target,
            |_| Err(ExError::new(ExErrorKind::ArchiveWrite).with_message("boom")),
            |e| io_error("t", e),
        )
        .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::ArchiveWrite);
        assert!(!target.exists());
        assert_eq!(tmp_count(temp_dir.path()), 0);
    }

    #[test]
    fn test_temp_path_appends_suffix() {
        assert_eq!(
            temp_path_for(Path::new("/r/20240601_1-savegames.zip")),
            PathBuf::from("/r/20240601_1-savegames.zip.tmp")
        );
    }
}
