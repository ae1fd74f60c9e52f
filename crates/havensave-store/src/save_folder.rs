//! Save folder inspection.
//!
//! A save folder holds `save/game` (the main document), `save/info` (small
//! XML header with `version`, `date` and `realTimeDate`) and optionally the
//! `balanced.bin` / `stats.bin` companions.

use havensave_core::tree::load_document;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const SAVE_SUBDIR: &str = "save";
pub const GAME_FILE: &str = "game";
pub const INFO_FILE: &str = "info";

/// Metadata for one save folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveFolderInfo {
    pub folder_path: PathBuf,
    pub version: Option<String>,
    pub date: Option<String>,
    pub real_time_date: Option<String>,
    pub game_file_exists: bool,
    pub info_file_exists: bool,
    pub balanced_bin_exists: bool,
    pub stats_bin_exists: bool,
}

impl SaveFolderInfo {
    /// Inspect `folder`. Never fails: an unreadable info file leaves the
    /// header fields empty.
    pub fn inspect(folder: &Path) -> Self {
        let save = folder.join(SAVE_SUBDIR);
        let info_path = save.join(INFO_FILE);
        let info_file_exists = info_path.is_file();

        let mut info = Self {
            folder_path: folder.to_path_buf(),
            version: None,
            date: None,
            real_time_date: None,
            game_file_exists: save.join(GAME_FILE).is_file(),
            info_file_exists,
            balanced_bin_exists: save.join("balanced.bin").is_file(),
            stats_bin_exists: save.join("stats.bin").is_file(),
        };

        if info_file_exists {
            match load_document(&info_path) {
                Ok(tree) => {
                    let root = tree.root();
                    info.version = root.attr("version").map(str::to_string);
                    info.date = root.attr("date").map(str::to_string);
                    info.real_time_date = root.attr("realTimeDate").map(str::to_string);
                    tracing::debug!(folder = %folder.display(), version = ?info.version, "save info read");
                }
                Err(err) => {
                    tracing::warn!(path = %info_path.display(), error = %err, "failed to parse save info");
                }
            }
        }
        info
    }

    pub fn is_valid_save(&self) -> bool {
        self.game_file_exists && self.info_file_exists
    }

    pub fn version_number(&self) -> Option<i64> {
        self.version.as_deref()?.trim().parse().ok()
    }

    /// Folder name, with the version when known
    pub fn display_name(&self) -> String {
        let name = self
            .folder_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match &self.version {
            Some(v) => format!("{} (v{})", name, v),
            None => name,
        }
    }
}

impl fmt::Display for SaveFolderInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SaveFolder({}, v{}, valid={})",
            self.display_name(),
            self.version.as_deref().unwrap_or("?"),
            self.is_valid_save()
        )
    }
}

/// Version tag for naming a backup of `source_dir`: `version` of
/// `save/info`, falling back to a top-level `info`
pub fn read_version_tag(source_dir: &Path) -> Option<String> {
    let nested = source_dir.join(SAVE_SUBDIR).join(INFO_FILE);
    let info_path = if nested.is_file() {
        nested
    } else {
        source_dir.join(INFO_FILE)
    };
    if !info_path.is_file() {
        return None;
    }
    match load_document(&info_path) {
        Ok(tree) => tree.root().attr("version").map(str::to_string),
        Err(err) => {
            tracing::warn!(path = %info_path.display(), error = %err, "failed to read save version");
            None
        }
    }
}

/// Save folder containing the document `game_file`: the grandparent for
/// the usual `<folder>/save/game` layout, otherwise the parent.
pub fn folder_for_game(game_file: &Path) -> Option<&Path> {
    let parent = game_file.parent().filter(|p| !p.as_os_str().is_empty())?;
    if parent.file_name().is_some_and(|n| n == SAVE_SUBDIR) {
        parent.parent().filter(|p| !p.as_os_str().is_empty())
    } else {
        Some(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn save_folder(info: Option<&str>) -> TempDir {
        let dir = TempDir::new().unwrap();
        let save = dir.path().join(SAVE_SUBDIR);
        fs::create_dir_all(&save).unwrap();
        fs::write(save.join(GAME_FILE), "<game/>").unwrap();
        if let Some(text) = info {
            fs::write(save.join(INFO_FILE), text).unwrap();
        }
        dir
    }

    #[test]
    fn test_inspect_reads_info_header() {
        let dir = save_folder(Some(r#"<info version="420" date="Day 12" realTimeDate="2024-06-01"/>"#));
        fs::write(dir.path().join(SAVE_SUBDIR).join("stats.bin"), [0u8; 4]).unwrap();

        let info = SaveFolderInfo::inspect(dir.path());

        assert!(info.is_valid_save());
        assert_eq!(info.version_number(), Some(420));
        assert_eq!(info.date.as_deref(), Some("Day 12"));
        assert_eq!(info.real_time_date.as_deref(), Some("2024-06-01"));
        assert!(info.stats_bin_exists);
        assert!(!info.balanced_bin_exists);
        assert!(info.display_name().ends_with("(v420)"));
    }

    #[test]
    fn test_missing_info_is_not_valid() {
        let dir = save_folder(None);
        let info = SaveFolderInfo::inspect(dir.path());
        assert!(!info.is_valid_save());
        assert_eq!(info.version, None);
        assert_eq!(read_version_tag(dir.path()), None);
    }

    #[test]
    fn test_unparsable_info_leaves_fields_empty() {
        let dir = save_folder(Some("<info version="));
        let info = SaveFolderInfo::inspect(dir.path());
        assert!(info.info_file_exists);
        assert_eq!(info.version, None);
    }

    #[test]
    fn test_version_tag_falls_back_to_top_level_info() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(INFO_FILE), r#"<info version="19"/>"#).unwrap();
        assert_eq!(read_version_tag(dir.path()).as_deref(), Some("19"));
    }

    #[test]
    fn test_non_numeric_version_number() {
        let dir = save_folder(Some(r#"<info version="beta"/>"#));
        assert_eq!(SaveFolderInfo::inspect(dir.path()).version_number(), None);
    }

    #[test]
    fn test_folder_for_game_skips_save_subdir() {
        assert_eq!(
            folder_for_game(Path::new("/saves/slot1/save/game")),
            Some(Path::new("/saves/slot1"))
        );
        assert_eq!(
            folder_for_game(Path::new("/saves/loose/game")),
            Some(Path::new("/saves/loose"))
        );
        assert_eq!(folder_for_game(Path::new("game")), None);
    }
}
