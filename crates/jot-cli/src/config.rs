//! Persistent CLI configuration.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use jot_core::store::NOTES_STORAGE_KEY;
use jot_core::util::normalize_text_option;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "cli-config.json";
pub const DATA_DIR_ENV: &str = "JOT_DATA_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    /// Directory holding the notes file
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Storage key (file stem) of the notes snapshot
    #[serde(default)]
    pub storage_key: Option<String>,
}

const fn default_config_version() -> u32 {
    1
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jot").join(CONFIG_FILE_NAME))
}

pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("jot"))
}

impl CliConfig {
    pub fn load() -> Result<Self, String> {
        match default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(NOTES_STORAGE_KEY)
    }

    /// Resolve the data directory: flag, then environment, then config file,
    /// then the platform data directory.
    pub fn resolve_data_dir(
        &self,
        explicit: Option<PathBuf>,
        env_value: Option<OsString>,
    ) -> Result<PathBuf, String> {
        explicit
            .or_else(|| env_value.filter(|value| !value.is_empty()).map(PathBuf::from))
            .or_else(|| self.data_dir.clone())
            .or_else(default_data_dir)
            .ok_or_else(|| {
                format!("Failed to resolve a data directory; pass --data-dir or set {DATA_DIR_ENV}")
            })
    }

    fn normalize(&mut self) {
        self.storage_key = normalize_text_option(self.storage_key.take());
        self.data_dir = self
            .data_dir
            .take()
            .filter(|path| !path.as_os_str().is_empty());
    }
}
