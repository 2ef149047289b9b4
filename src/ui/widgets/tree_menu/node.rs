//! Tree node model.
//!
//! Nodes own their children; the parent relation is expressed with
//! [`NodePath`] index paths so lookups such as "is this an ancestor of that"
//! never need a back-pointer.

use std::path::{Path, PathBuf};

/// A node in the menu tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
    /// Whether the children are shown
    pub expanded: bool,
    depth: usize,
    script: Option<PathBuf>,
}

impl TreeNode {
    /// Create a new root node (depth 0, collapsed)
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
            expanded: false,
            depth: 0,
            script: None,
        }
    }

    /// Create a new root node that launches `script`
    pub fn executable(label: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        let mut node = Self::new(label);
        node.script = Some(script.into());
        node
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_executable(&self) -> bool {
        self.script.is_some()
    }

    /// Script launched by this node, if it is executable
    pub fn script_path(&self) -> Option<&Path> {
        self.script.as_deref()
    }

    /// Add a container child and return it
    pub fn add_child(&mut self, label: impl Into<String>) -> &mut TreeNode {
        self.graft(TreeNode::new(label))
    }

    /// Add an executable child and return it
    pub fn add_executable_child(
        &mut self,
        label: impl Into<String>,
        script: impl Into<PathBuf>,
    ) -> &mut TreeNode {
        self.graft(TreeNode::executable(label, script))
    }

    /// Append a pre-built subtree as the last child.
    ///
    /// Depths of the whole subtree are re-derived from this node; existing
    /// children are kept.
    pub fn graft(&mut self, mut subtree: TreeNode) -> &mut TreeNode {
        subtree.set_depth(self.depth + 1);
        self.children.push(subtree);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
        for child in &mut self.children {
            child.set_depth(depth + 1);
        }
    }

    /// Flip the expanded flag. Returns false (and changes nothing) for leaves.
    pub fn toggle_expand(&mut self) -> bool {
        if self.children.is_empty() {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }

    /// Node at `path` below this one
    pub fn get(&self, path: &NodePath) -> Option<&TreeNode> {
        path.0
            .iter()
            .try_fold(self, |node, &idx| node.children.get(idx))
    }

    /// Mutable node at `path` below this one
    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut TreeNode> {
        let mut node = self;
        for &idx in &path.0 {
            node = node.children.get_mut(idx)?;
        }
        Some(node)
    }

    /// Number of nodes in this subtree, including this one
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::len).sum::<usize>()
    }

    /// Always false: a tree has at least its root
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Location of a node as child indices from the root.
///
/// The empty path addresses the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Path of the parent, `None` for the root
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// True when `other` lies strictly below `self`
    pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
        other.0.len() > self.0.len() && other.0.starts_with(&self.0)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}
