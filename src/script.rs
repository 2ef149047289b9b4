//! Script execution
//!
//! Scripts run synchronously with the terminal handed over: stdin, stdout
//! and stderr are inherited, as is the environment.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// Why a script run did not succeed
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The process could not be started
    #[error("failed to start {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited unsuccessfully
    #[error("{path} exited with {status}")]
    Exit { path: PathBuf, status: String },
}

/// Strategy for launching a node's script
pub trait ScriptRunner {
    /// Run `script` to completion
    fn run(&mut self, script: &Path) -> Result<(), ScriptError>;
}

/// Runs scripts as child processes attached to the current terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    fn command(script: &Path) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("bash");
            cmd.arg(script);
            cmd
        } else {
            Command::new(script)
        }
    }
}

impl ScriptRunner for ProcessRunner {
    fn run(&mut self, script: &Path) -> Result<(), ScriptError> {
        tracing::info!(script = %script.display(), "launching script");
        let status = Self::command(script)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ScriptError::Spawn {
                path: script.to_path_buf(),
                source,
            })?;
        check_status(script, status)
    }
}

fn check_status(script: &Path, status: ExitStatus) -> Result<(), ScriptError> {
    if status.success() {
        tracing::info!(script = %script.display(), "script finished");
        return Ok(());
    }
    tracing::warn!(script = %script.display(), %status, "script failed");
    Err(ScriptError::Exit {
        path: script.to_path_buf(),
        status: status.to_string(),
    })
}
