use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{BoardError, BoardResult};

pub const DEFAULT_SLOT_NAME: &str = "taskboard-lists";
pub const DEFAULT_DONE_LIST_NAME: &str = "Done";
pub const DEFAULT_TASK_NAME: &str = "New task";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the durable slot file.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Key of the durable slot; the file on disk is `<data_dir>/<slot_name>.json`.
    #[serde(default)]
    pub slot_name: Option<String>,
    /// Name of the stage counted as finished work in the completion summary.
    #[serde(default)]
    pub done_list_name: Option<String>,
    #[serde(default)]
    pub default_task_name: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config, falling back to defaults when it is missing or broken.
    pub fn load() -> Self {
        Self::config_path()
            .filter(|path| path.exists())
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> BoardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| BoardError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("taskboard")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn effective_slot_name(&self) -> &str {
        self.slot_name.as_deref().unwrap_or(DEFAULT_SLOT_NAME)
    }

    pub fn effective_done_list_name(&self) -> &str {
        self.done_list_name
            .as_deref()
            .unwrap_or(DEFAULT_DONE_LIST_NAME)
    }

    pub fn effective_default_task_name(&self) -> &str {
        self.default_task_name.as_deref().unwrap_or(DEFAULT_TASK_NAME)
    }

    pub fn slot_path(&self) -> PathBuf {
        self.effective_data_dir()
            .join(format!("{}.json", self.effective_slot_name()))
    }
}
