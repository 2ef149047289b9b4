//! Tree Menu Widget
//!
//! Hierarchical menu navigation in a raw-mode terminal.
//!
//! # Module Structure
//!
//! - `node` - TreeNode data structure and node paths
//! - `builder` - Tree construction from menu descriptions
//! - `projection` - Flattening the visible part of the tree
//! - `menu` - TreeMenu selection state
//! - `render` - Frame rendering
//! - `input` - Raw byte decoding
//! - `session` - The interactive loop and terminal-mode handling

mod builder;
mod input;
mod menu;
mod node;
mod projection;
mod render;
mod session;

pub use builder::{build_session_tree, build_tree};
pub use input::{decode_byte, decode_escape, read_command, Command, Decoded};
pub use menu::TreeMenu;
pub use node::{NodePath, TreeNode};
pub use projection::project;
pub use render::{render_frame, render_row, selection_status, visible_window, RenderOptions};
pub use session::{Session, SessionState, DEFAULT_READ_BACKOFF};
