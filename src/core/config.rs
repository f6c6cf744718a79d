/*
 * Loads the plugin's host-managed settings. The only setting is the label of
 * the catalog item that triggers a color pick. Settings are read from a JSON
 * file in the application's local configuration directory; the plugin never
 * writes them back.
 *
 * It uses a trait-based approach (`SettingsManagerOperations`) so the plugin
 * logic can be tested with mock implementations. The concrete implementation
 * (`CoreSettingsManager`) relies on `path_utils` to locate the directory.
 */
use crate::core::path_utils;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

pub const SETTINGS_FILENAME: &str = "settings.json";
pub const DEFAULT_ITEM_LABEL: &str = "Color pick:";

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Serde(serde_json::Error),
    NoProjectDirectory,
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Settings I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "Settings file format error: {e}"),
            ConfigError::NoProjectDirectory => {
                write!(f, "Could not determine configuration directory for settings")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serde(e) => Some(e),
            ConfigError::NoProjectDirectory => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    pub item_label: String,
}

impl Default for PluginSettings {
    fn default() -> Self {
        PluginSettings {
            item_label: DEFAULT_ITEM_LABEL.to_string(),
        }
    }
}

impl PluginSettings {
    // A blank label would make the catalog item unreachable.
    fn normalized(mut self) -> Self {
        let trimmed = self.item_label.trim();
        if trimmed.is_empty() {
            self.item_label = DEFAULT_ITEM_LABEL.to_string();
        } else if trimmed.len() != self.item_label.len() {
            self.item_label = trimmed.to_string();
        }
        self
    }
}

pub trait SettingsManagerOperations: Send + Sync {
    fn load_settings(&self, app_name: &str) -> Result<PluginSettings>;
}

/*
 * Reads settings from a specific file. A missing file yields the defaults.
 */
pub fn load_settings_from_path(file_path: &Path) -> Result<PluginSettings> {
    if !file_path.exists() {
        log::debug!("Settings: File {file_path:?} does not exist, using defaults.");
        return Ok(PluginSettings::default());
    }
    let reader = BufReader::new(File::open(file_path)?);
    let settings: PluginSettings = serde_json::from_reader(reader)?;
    log::debug!("Settings: Loaded {settings:?} from {file_path:?}.");
    Ok(settings.normalized())
}

pub struct CoreSettingsManager {}

impl CoreSettingsManager {
    pub fn new() -> Self {
        CoreSettingsManager {}
    }
}

impl Default for CoreSettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsManagerOperations for CoreSettingsManager {
    fn load_settings(&self, app_name: &str) -> Result<PluginSettings> {
        log::trace!("CoreSettingsManager: Loading settings for app '{app_name}'");
        let config_dir = path_utils::get_base_app_config_local_dir(app_name)
            .ok_or(ConfigError::NoProjectDirectory)?;
        load_settings_from_path(&config_dir.join(SETTINGS_FILENAME))
    }
}
