//! Tree menu navigation state.
//!
//! Owns the tree, the current projection and the selection. Every mutation
//! that may change the projection rebuilds it and clamps the selection.

use super::node::{NodePath, TreeNode};
use super::projection::project;

/// Navigable view over a tree
#[derive(Debug, Clone)]
pub struct TreeMenu {
    root: TreeNode,
    visible: Vec<NodePath>,
    selected: usize,
}

impl TreeMenu {
    /// Create a menu over `root`; the selection starts on the first row
    pub fn new(root: TreeNode) -> Self {
        let mut menu = Self {
            root,
            visible: Vec::new(),
            selected: 0,
        };
        menu.rebuild();
        menu
    }

    /// Recompute the projection and clamp the selection
    pub fn rebuild(&mut self) {
        self.visible = project(&self.root);
        if self.visible.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.visible.len() {
            self.selected = self.visible.len() - 1;
        }
    }

    /// Force the root open and re-project
    pub fn expand_root(&mut self) {
        self.root.expanded = true;
        self.rebuild();
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Paths of the visible nodes, in display order
    pub fn visible(&self) -> &[NodePath] {
        &self.visible
    }

    /// Visible nodes, in display order
    pub fn visible_nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.visible.iter().filter_map(|p| self.root.get(p))
    }

    /// Index of the selected row, `None` when nothing is visible
    pub fn selected_index(&self) -> Option<usize> {
        (!self.visible.is_empty()).then_some(self.selected)
    }

    pub fn selected_path(&self) -> Option<&NodePath> {
        self.visible.get(self.selected)
    }

    pub fn selected_node(&self) -> Option<&TreeNode> {
        self.selected_path().and_then(|p| self.root.get(p))
    }

    /// Move the selection up one row. Returns false at the top.
    pub fn move_up(&mut self) -> bool {
        if self.selected == 0 || self.visible.is_empty() {
            return false;
        }
        self.selected -= 1;
        true
    }

    /// Move the selection down one row. Returns false at the bottom.
    pub fn move_down(&mut self) -> bool {
        if self.selected + 1 >= self.visible.len() {
            return false;
        }
        self.selected += 1;
        true
    }

    /// Expand or collapse the selected node.
    ///
    /// Returns false when the node has no children. The selection keeps its
    /// numeric index, so after a collapse above it the highlighted row may
    /// belong to a different node.
    pub fn toggle_selected(&mut self) -> bool {
        let Some(path) = self.selected_path().cloned() else {
            return false;
        };
        let toggled = self
            .root
            .get_mut(&path)
            .is_some_and(TreeNode::toggle_expand);
        if toggled {
            self.rebuild();
        }
        toggled
    }
}
