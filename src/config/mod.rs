//! Configuration module for dui
//!
//! Resolution order for the menu description:
//! 1. `--menu` flag (highest priority)
//! 2. Environment variable (`DUI_MENU`)
//! 3. User config (`~/.riskkode/dui/config.toml`)
//! 4. `./config.json` in the working directory
//! 5. Built-in menu only

mod loader;
mod types;

pub use loader::{
    default_config_path, dui_home_dir, resolve_menu_path, ConfigWarning, LoadedConfig,
    CONFIG_FILE, DUI_HOME_VAR, DUI_MENU_VAR, LOCAL_MENU_FILE,
};
pub use types::Config;
