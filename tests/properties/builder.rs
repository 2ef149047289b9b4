//! Property tests for building trees from menu descriptions.

use proptest::prelude::*;

use dui::{build_session_tree, build_tree, MenuItem, TreeNode};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 _-]{0,12}").unwrap()
}

/// Random description; leaves are sometimes executable
fn description() -> impl Strategy<Value = MenuItem> {
    let leaf = prop_oneof![
        name().prop_map(|n| MenuItem::node(n, Vec::new())),
        (name(), name()).prop_map(|(n, script)| MenuItem::executable(n, format!("/opt/{script}.sh"))),
    ];
    leaf.prop_recursive(4, 48, 5, |inner| {
        (name(), proptest::collection::vec(inner, 0..5))
            .prop_map(|(n, children)| MenuItem::node(n, children))
    })
}

fn assert_child_depths(node: &TreeNode) -> Result<(), TestCaseError> {
    for child in node.children() {
        prop_assert_eq!(child.depth(), node.depth() + 1, "below {}", node.label());
        assert_child_depths(child)?;
    }
    Ok(())
}

fn count(item: &MenuItem) -> usize {
    1 + item.children.iter().map(count).sum::<usize>()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A built tree has depth 0 at the root and parent + 1 below.
    #[test]
    fn property_built_depths_follow_parents(item in description()) {
        let root = build_tree(&item).unwrap();
        prop_assert_eq!(root.depth(), 0);
        prop_assert_eq!(root.len(), count(&item));
        assert_child_depths(&root)?;
    }

    /// PROPERTY: Grafting under the built-in root re-derives every depth.
    #[test]
    fn property_grafted_depths_follow_parents(item in description()) {
        let root = build_session_tree(Some(&item)).unwrap();
        let grafted = root.children().last().unwrap();
        prop_assert_eq!(grafted.label(), item.name.as_str());
        prop_assert_eq!(grafted.depth(), 1);
        assert_child_depths(&root)?;
    }
}
