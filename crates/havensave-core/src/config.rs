//! User settings persisted as TOML.

use crate::compare::DEFAULT_MAX_DEPTH;
use crate::errors::{HavenError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "HAVENSAVE_CONFIG";
pub const BACKUP_DIR_ENV: &str = "HAVENSAVE_BACKUP_DIR";
pub const CONFIG_FILE_NAME: &str = ".havensave.toml";
pub const DEFAULT_BACKUP_COUNT: usize = 3;

/// When backups are taken before a save is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupMode {
    /// Back up automatically
    Auto,
    /// Only when asked
    Manual,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub backup_folder: PathBuf,
    /// Number of distinct backup dates kept by pruning
    pub backup_count: usize,
    pub auto_backup: BackupMode,
    pub last_used_folder: Option<PathBuf>,
    /// Reference catalog override (TOML)
    pub catalog_path: Option<PathBuf>,
    pub compare_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backup_folder: home_dir().join("SpaceHavenBackups"),
            backup_count: DEFAULT_BACKUP_COUNT,
            auto_backup: BackupMode::None,
            last_used_folder: None,
            catalog_path: None,
            compare_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl Settings {
    /// `~/.havensave.toml`
    pub fn default_path() -> PathBuf {
        home_dir().join(CONFIG_FILE_NAME)
    }

    /// # Errors
    ///
    /// `Io` if the file cannot be read, `InvalidConfig` if it does not parse
    /// or fails validation.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| HavenError::io("load_config", e))?;
        let settings: Self = toml::from_str(&content).map_err(|e| HavenError::InvalidConfig {
            reason: format!("{}: {}", path.display(), e.message()),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// `Serialization` or `Io` on failure.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content).map_err(|e| HavenError::io("save_config", e))?;
        tracing::info!(path = %path.as_ref().display(), "settings saved");
        Ok(())
    }

    /// Resolve settings for a run.
    ///
    /// Order: explicit path, then `HAVENSAVE_CONFIG`, then `~/.havensave.toml`
    /// when it exists, then defaults. `HAVENSAVE_BACKUP_DIR` overrides the
    /// backup folder of whichever was picked.
    ///
    /// # Errors
    ///
    /// Propagates load failures of an explicitly named file.
    pub fn resolve(cli_config: Option<&Path>) -> Result<Self> {
        let mut settings = if let Some(path) = cli_config {
            Self::load_from_file(path)?
        } else if let Ok(env_config) = std::env::var(CONFIG_ENV) {
            Self::load_from_file(env_config)?
        } else if Self::default_path().exists() {
            Self::load_from_file(Self::default_path())?
        } else {
            Self::default()
        };

        if let Ok(dir) = std::env::var(BACKUP_DIR_ENV) {
            settings.backup_folder = PathBuf::from(dir);
        }
        Ok(settings)
    }

    /// # Errors
    ///
    /// `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.backup_count == 0 {
            return Err(HavenError::InvalidConfig {
                reason: "backup_count must be at least 1".to_string(),
            });
        }
        if self.backup_folder.as_os_str().is_empty() {
            return Err(HavenError::InvalidConfig {
                reason: "backup_folder must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// True when no settings file exists at `path` yet
    pub fn is_first_run(path: &Path) -> bool {
        !path.exists()
    }
}
