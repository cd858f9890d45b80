//! Settings file.
//!
//! Settings are read from `--config PATH` or, when absent, from the
//! platform-specific config folder:
//! - macOS: ~/Library/Application Support/com.campanha.Campanha/settings.toml
//! - Windows: %APPDATA%/campanha/Campanha/config/settings.toml
//! - Linux: ~/.config/campanha/settings.toml
//!
//! ```toml
//! [filter]
//! type_keywords = ["Médio", "Fundamental"]
//!
//! [export]
//! file_name = "base_campanha_final.xlsx"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use campanha_output::DEFAULT_FILE_NAME;
use campanha_transform::PipelineOptions;
use campanha_transform::options::DEFAULT_TYPE_KEYWORDS;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "campanha";
const APP_NAME: &str = "Campanha";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub filter: FilterSettings,
    pub export: ExportSettings,
}

/// KPI type filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Case-insensitive substrings kept in the type column; empty disables the filter.
    pub type_keywords: Vec<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            type_keywords: DEFAULT_TYPE_KEYWORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Workbook file name used when `--output` is not given.
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl Settings {
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions::default().with_type_keywords(self.filter.type_keywords.iter().cloned())
    }
}

/// Get the path to the default settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from `explicit` or the default location.
///
/// Never fails: a missing file, an unreadable file or invalid TOML all yield
/// the default settings (the last two with a warning).
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    match explicit {
        Some(path) => load_settings_from(path),
        None => {
            let Some(path) = settings_path() else {
                tracing::debug!("could not determine settings path, using defaults");
                return Settings::default();
            };
            load_settings_from(&path)
        }
    }
}

pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "invalid settings file, using defaults");
                Settings::default()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to read settings file, using defaults");
            Settings::default()
        }
    }
}
