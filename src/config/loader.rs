//! Configuration loading and persistence

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DuiError, DuiResult};

use super::types::Config;

/// Config file location below the home directory
pub const CONFIG_FILE: &str = ".riskkode/dui/config.toml";

/// Menu description picked up from the working directory
pub const LOCAL_MENU_FILE: &str = "config.json";

/// Overrides the home directory (used for test isolation)
pub const DUI_HOME_VAR: &str = "DUI_HOME";

/// Overrides the configured menu description
pub const DUI_MENU_VAR: &str = "DUI_MENU";

/// Non-fatal configuration warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())
    }
}

/// Home directory for dui-internal paths: `DUI_HOME`, else the system home
pub fn dui_home_dir() -> Option<PathBuf> {
    std::env::var_os(DUI_HOME_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// `<home>/.riskkode/dui/config.toml`
pub fn default_config_path() -> DuiResult<PathBuf> {
    dui_home_dir()
        .map(|home| home.join(CONFIG_FILE))
        .ok_or(DuiError::NoHomeDir)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DuiResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| DuiError::ConfigRead {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DuiError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((config, warnings))
}

/// Result of [`load_or_init`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// The file did not exist and was written with defaults
    pub created: bool,
}

/// Load `path`, creating it with defaults first if it does not exist
pub fn load_or_init(path: &Path) -> DuiResult<LoadedConfig> {
    if !path.exists() {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let config = Config::defaults_in(dir);
        save(&config, path)?;
        return Ok(LoadedConfig {
            config,
            warnings: Vec::new(),
            created: true,
        });
    }

    let (config, warnings) = load_with_warnings(path)?;
    Ok(LoadedConfig {
        config,
        warnings,
        created: false,
    })
}

/// Write `config` as TOML
pub fn save(config: &Config, path: &Path) -> DuiResult<()> {
    let write_error = |message: String| DuiError::ConfigWrite {
        file: path.to_path_buf(),
        message,
    };

    let content = toml::to_string_pretty(config).map_err(|e| write_error(e.to_string()))?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| write_error(e.to_string()))?;
    }
    fs::write(path, content).map_err(|e| write_error(e.to_string()))
}

/// Apply environment variable overrides (DUI_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(super) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(menu) = get_env(DUI_MENU_VAR).filter(|v| !v.is_empty()) {
        config.menu = Some(PathBuf::from(menu));
    }
    config
}

/// Pick the menu description to graft: flag, then config, then
/// `config.json` in `cwd`.
pub fn resolve_menu_path(flag: Option<&Path>, config: &Config, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    if let Some(path) = &config.menu {
        return Some(path.clone());
    }
    let local = cwd.join(LOCAL_MENU_FILE);
    local.is_file().then_some(local)
}
