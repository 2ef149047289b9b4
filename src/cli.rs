use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// dui - Developer User Interface: browse a menu tree and run scripts
#[derive(Parser, Debug)]
#[command(name = "dui")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'dui' without a command to open the menu.")]
pub struct Cli {
    /// JSON menu description to show under the built-in menu
    #[arg(short, long, global = true)]
    pub menu: Option<PathBuf>,

    /// Config file [default: ~/.riskkode/dui/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv); logs are written to the logs directory
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Store the location of the JSON menu description in the config file
    SetMenu {
        /// Path to an existing menu description
        path: PathBuf,
    },

    /// Print the configuration in effect
    ShowConfig,
}
