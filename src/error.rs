//! Error types for dui
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dui operations
pub type DuiResult<T> = Result<T, DuiError>;

/// Main error type for dui operations
#[derive(Error, Debug)]
pub enum DuiError {
    /// Menu description file could not be read
    #[error("cannot read menu description {file}: {source}")]
    MenuRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Menu description is not valid JSON for the expected shape
    #[error("invalid menu description in {file}: {message}")]
    MenuParse { file: PathBuf, message: String },

    /// Menu description decoded but violates the node rules
    #[error("invalid menu entry '{name}': {reason}")]
    InvalidMenu { name: String, reason: String },

    /// Config file could not be read
    #[error("cannot read config {file}: {source}")]
    ConfigRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected shape
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Config file could not be written
    #[error("cannot write config {file}: {message}")]
    ConfigWrite { file: PathBuf, message: String },

    /// A path given by the user does not exist
    #[error("path <{path}> does not exist")]
    PathNotFound { path: PathBuf },

    /// Home directory could not be resolved
    #[error("cannot determine the home directory")]
    NoHomeDir,

    /// Entering or leaving raw mode failed
    #[error("terminal mode error: {message}")]
    TerminalMode { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DuiError {
    pub(crate) fn terminal_mode(err: impl std::fmt::Display) -> Self {
        DuiError::TerminalMode {
            message: err.to_string(),
        }
    }
}
