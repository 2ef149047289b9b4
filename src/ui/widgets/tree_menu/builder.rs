//! Tree construction from menu descriptions.

use crate::error::{DuiError, DuiResult};
use crate::menu::{default_menu, ItemKind, MenuItem};

use super::node::TreeNode;

/// Build a tree from a menu description.
///
/// The root entry always becomes a plain container. Below it, `executable`
/// entries carry their script path and every entry keeps its children in
/// description order.
pub fn build_tree(item: &MenuItem) -> DuiResult<TreeNode> {
    check_name(item)?;
    let mut root = TreeNode::new(item.name.clone());
    for child in &item.children {
        attach(&mut root, child)?;
    }
    Ok(root)
}

fn attach(parent: &mut TreeNode, item: &MenuItem) -> DuiResult<()> {
    check_name(item)?;
    let node = match item.kind {
        ItemKind::Executable => {
            let path = item
                .path
                .as_ref()
                .filter(|p| !p.as_os_str().is_empty())
                .ok_or_else(|| DuiError::InvalidMenu {
                    name: item.name.clone(),
                    reason: "executable entries need a non-empty path".to_string(),
                })?;
            parent.add_executable_child(item.name.clone(), path.clone())
        }
        ItemKind::Node => parent.add_child(item.name.clone()),
    };
    for child in &item.children {
        attach(node, child)?;
    }
    Ok(())
}

fn check_name(item: &MenuItem) -> DuiResult<()> {
    if item.name.trim().is_empty() {
        return Err(DuiError::InvalidMenu {
            name: item.name.clone(),
            reason: "name must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Build the tree a session starts with: the built-in menu, with the user's
/// menu (if any) grafted under its root as the last child.
pub fn build_session_tree(user_menu: Option<&MenuItem>) -> DuiResult<TreeNode> {
    let mut root = build_tree(&default_menu())?;
    if let Some(item) = user_menu {
        let subtree = build_tree(item)?;
        tracing::debug!(menu = %item.name, nodes = subtree.len(), "grafting user menu");
        root.graft(subtree);
    }
    Ok(root)
}
