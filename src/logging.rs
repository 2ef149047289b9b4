//! Log setup.
//!
//! The menu owns stdout, so log records go to `<logs_dir>/dui.log`. Nothing
//! is installed unless `-v` is given or `DUI_LOG` holds a filter.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::DuiResult;

/// Filter directive read from the environment, `EnvFilter` syntax
pub const DUI_LOG_VAR: &str = "DUI_LOG";

pub const LOG_FILE: &str = "dui.log";

/// Filter for a `-v` count
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 | 1 => "dui=info",
        2 => "dui=debug",
        _ => "dui=trace",
    }
}

/// Install the file subscriber when logging was asked for.
///
/// Returns the log file path when a subscriber was installed.
pub fn init(verbose: u8, logs_dir: &Path) -> DuiResult<Option<PathBuf>> {
    let from_env = std::env::var(DUI_LOG_VAR).ok().filter(|v| !v.is_empty());
    if verbose == 0 && from_env.is_none() {
        return Ok(None);
    }

    let filter = from_env
        .as_deref()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity_filter(verbose)));

    fs::create_dir_all(logs_dir)?;
    let path = logs_dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok();

    Ok(installed.then_some(path))
}
