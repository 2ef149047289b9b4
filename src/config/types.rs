//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DuiError, DuiResult};

use super::loader::{self, ConfigWarning, LoadedConfig};

/// User configuration stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// JSON menu description grafted under the built-in menu
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<PathBuf>,

    /// Directory for `dui.log`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_dir: Option<PathBuf>,
}

impl Config {
    /// Defaults written when the config file is first created
    pub fn defaults_in(config_dir: &Path) -> Self {
        Self {
            menu: None,
            logs_dir: Some(config_dir.join("logs")),
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DuiResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DuiResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `path`, creating it with defaults first if it does not exist
    pub fn load_or_init(path: &Path) -> DuiResult<LoadedConfig> {
        loader::load_or_init(path)
    }

    /// Apply environment variable overrides (DUI_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Write the configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> DuiResult<()> {
        loader::save(self, path)
    }

    /// Point the config at a menu description.
    ///
    /// The file must exist; it is stored as an absolute path.
    pub fn set_menu(&mut self, location: &Path) -> DuiResult<()> {
        let absolute = location
            .canonicalize()
            .map_err(|_| DuiError::PathNotFound {
                path: location.to_path_buf(),
            })?;
        self.menu = Some(absolute);
        Ok(())
    }

    /// Directory for the log file, falling back to `<config dir>/logs`
    pub fn logs_dir_or(&self, config_dir: &Path) -> PathBuf {
        self.logs_dir
            .clone()
            .unwrap_or_else(|| config_dir.join("logs"))
    }
}
