//! Application settings loaded from `~/.config/cinedex/settings.toml`.
//!
//! Every key is optional. A missing file yields the defaults, which keep the
//! database and JSON files in the current directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub transfer: TransferSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// SQLite database file.
    pub database: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database: PathBuf::from("movies.db"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransferSettings {
    /// Default file offered by the import prompt.
    pub import_file: PathBuf,
    /// Default file offered by the export prompt.
    pub export_file: PathBuf,
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            import_file: PathBuf::from("movies.json"),
            export_file: PathBuf::from("exported.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Show debug-level messages with timestamps.
    pub verbose: bool,
    /// Also append log output to this file (ANSI codes stripped).
    pub logfile: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load settings from `path`, falling back to defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(SettingsError::Io {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };
        Self::from_toml_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }
}

/// Canonical path to the settings file: `~/.config/cinedex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("cinedex").join("settings.toml")
}

/// Load settings from [`settings_path`].
pub fn load_settings() -> Result<Settings, SettingsError> {
    let path = settings_path();
    let settings = Settings::load_from(&path)?;
    log::debug!("Settings loaded from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
