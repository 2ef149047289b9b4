//! Menu descriptions
//!
//! A menu is described as a tree of records:
//!
//! ```json
//! { "name": "tools", "type": "node", "children": [
//!     { "name": "backup", "type": "executable", "path": "/usr/local/bin/backup.sh" }
//! ] }
//! ```
//!
//! Descriptions are turned into a navigable tree by
//! [`crate::ui::widgets::tree_menu::build_tree`].

mod loader;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use loader::{load_menu_file, parse_menu};

/// Kind of a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Launches the script at `path`
    Executable,
    /// Plain container
    #[default]
    Node,
}

/// One record of a menu description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: ItemKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Create a container entry
    pub fn node(name: impl Into<String>, children: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Node,
            path: None,
            children,
        }
    }

    /// Create an executable entry
    pub fn executable(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Executable,
            path: Some(path.into()),
            children: Vec::new(),
        }
    }
}

/// Name of the built-in root entry
pub const DEFAULT_ROOT: &str = "dui";

/// The built-in menu every session starts from.
///
/// The root is declared executable without a path; the builder always turns
/// the root into a container, so this is harmless.
pub fn default_menu() -> MenuItem {
    MenuItem {
        name: DEFAULT_ROOT.to_string(),
        kind: ItemKind::Executable,
        path: None,
        children: vec![MenuItem::node("Settings", Vec::new())],
    }
}
