//! dui - Developer User Interface
//!
//! A terminal tree menu: navigate named nodes, expand and collapse branches,
//! and launch scripts attached to executable nodes with the terminal handed
//! over to them.

pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod script;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use error::{DuiError, DuiResult};
pub use menu::{default_menu, load_menu_file, ItemKind, MenuItem};
pub use script::{ProcessRunner, ScriptError, ScriptRunner};
pub use ui::terminal::{StdTerminal, Terminal, TerminalCapabilities};
pub use ui::widgets::tree_menu::{
    build_session_tree, build_tree, project, Command, NodePath, Session, SessionState, TreeMenu,
    TreeNode,
};
