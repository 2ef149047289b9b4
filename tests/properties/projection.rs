//! Property tests for tree projection and selection.

use proptest::prelude::*;

use dui::{project, Command, TreeMenu, TreeNode};

/// Random tree shape: each node is (expanded, children)
#[derive(Debug, Clone)]
struct Shape {
    expanded: bool,
    children: Vec<Shape>,
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = any::<bool>().prop_map(|expanded| Shape {
        expanded,
        children: Vec::new(),
    });
    leaf.prop_recursive(4, 40, 5, |inner| {
        (any::<bool>(), proptest::collection::vec(inner, 0..5))
            .prop_map(|(expanded, children)| Shape { expanded, children })
    })
}

fn grow(node: &mut TreeNode, shape: &Shape, counter: &mut usize) {
    for child_shape in &shape.children {
        *counter += 1;
        let child = node.add_child(format!("n{counter}"));
        grow(child, child_shape, counter);
        child.expanded = child_shape.expanded;
    }
}

fn build(shape: &Shape) -> TreeNode {
    let mut root = TreeNode::new("root");
    let mut counter = 0;
    grow(&mut root, shape, &mut counter);
    root.expanded = shape.expanded;
    root
}

/// Nodes reachable through expanded ancestors, root included
fn reachable(node: &TreeNode) -> usize {
    1 + if node.expanded {
        node.children().iter().map(reachable).sum()
    } else {
        0
    }
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveUp),
        Just(Command::MoveDown),
        Just(Command::ToggleExpand),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The projection lists exactly the nodes whose ancestors are all expanded.
    #[test]
    fn property_projection_matches_expanded_reach(shape in shape()) {
        let root = build(&shape);
        let visible = project(&root);
        prop_assert_eq!(visible.len(), reachable(&root));
        prop_assert_eq!(visible[0].indices(), &[] as &[usize]);
    }

    /// PROPERTY: Each visible row is at most one level deeper than the row above it.
    #[test]
    fn property_projection_is_preorder(shape in shape()) {
        let root = build(&shape);
        let visible = project(&root);
        for pair in visible.windows(2) {
            let above = root.get(&pair[0]).unwrap();
            let below = root.get(&pair[1]).unwrap();
            prop_assert!(below.depth() <= above.depth() + 1);
            prop_assert_eq!(below.depth(), pair[1].indices().len());
        }
    }

    /// PROPERTY: Selection stays on a visible row whatever keys are pressed.
    #[test]
    fn property_selection_in_bounds(
        shape in shape(),
        commands in proptest::collection::vec(command(), 0..60),
    ) {
        let mut menu = TreeMenu::new(build(&shape));
        for command in commands {
            match command {
                Command::MoveUp => { menu.move_up(); }
                Command::MoveDown => { menu.move_down(); }
                Command::ToggleExpand => { menu.toggle_selected(); }
                Command::Execute | Command::Quit => {}
            }
            let selected = menu.selected_index().unwrap();
            prop_assert!(selected < menu.visible().len());
            prop_assert_eq!(menu.visible().to_vec(), project(menu.root()));
        }
    }

    /// PROPERTY: Toggling a leaf changes nothing.
    #[test]
    fn property_leaf_toggle_is_noop(shape in shape()) {
        let mut root = build(&shape);
        root.expanded = true;
        let mut menu = TreeMenu::new(root);
        let leaf = menu
            .visible()
            .iter()
            .position(|path| !menu.root().get(path).unwrap().has_children());
        if let Some(index) = leaf {
            for _ in 0..index {
                menu.move_down();
            }
            let before = menu.visible().to_vec();
            prop_assert!(!menu.toggle_selected());
            prop_assert_eq!(menu.visible().to_vec(), before);
            prop_assert_eq!(menu.selected_index(), Some(index));
        }
    }
}
