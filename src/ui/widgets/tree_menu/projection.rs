//! Visible-node projection.

use super::node::{NodePath, TreeNode};

/// Flatten the visible part of the tree in pre-order.
///
/// Every node reached is included; children are visited only below
/// expanded nodes. The result is rebuilt from scratch on each call.
pub fn project(root: &TreeNode) -> Vec<NodePath> {
    let mut out = Vec::new();
    visit(root, NodePath::root(), &mut out);
    out
}

fn visit(node: &TreeNode, path: NodePath, out: &mut Vec<NodePath>) {
    let expanded = node.expanded;
    out.push(path.clone());
    if expanded {
        for (i, child) in node.children().iter().enumerate() {
            visit(child, path.child(i), out);
        }
    }
}
