use std::fmt::Display;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::TreeArena;

/// Conversion of a tree arena into a renderable termtree.
pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<V: Display> TreeRender for TreeArena<V> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let root = self
            .root()
            .and_then(|root_idx| self.get_node(root_idx).map(|node| (root_idx, node)));

        if let Some((root_idx, root_node)) = root {
            let mut tree = Tree::new(root_node.value.to_string());

            fn build_tree<V: Display>(
                arena: &TreeArena<V>,
                node_idx: Index,
                parent_tree: &mut Tree<String>,
            ) {
                if let Some(node) = arena.get_node(node_idx) {
                    for child_idx in [node.left, node.right].into_iter().flatten() {
                        if let Some(child) = arena.get_node(child_idx) {
                            let mut child_tree = Tree::new(child.value.to_string());
                            build_tree(arena, child_idx, &mut child_tree);
                            parent_tree.push(child_tree);
                        }
                    }
                }
            }

            build_tree(self, root_idx, &mut tree);
            tree
        } else {
            Tree::new("Empty tree".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::ChildSlot;

    #[test]
    fn test_simple_tree_rendering() {
        let mut arena = TreeArena::new();
        let root = arena.insert_node(3, None);
        arena.insert_node(9, Some((root, ChildSlot::Left)));
        let right = arena.insert_node(20, Some((root, ChildSlot::Right)));
        arena.insert_node(15, Some((right, ChildSlot::Left)));
        arena.insert_node(7, Some((right, ChildSlot::Right)));

        let rendered = arena.to_tree_string().to_string();
        let expected = "\
3
├── 9
└── 20
    ├── 15
    └── 7";
        assert_eq!(rendered.trim_end(), expected);
    }

    #[test]
    fn test_empty_tree_rendering() {
        let arena: TreeArena<i32> = TreeArena::new();
        assert_eq!(arena.to_tree_string().to_string().trim_end(), "Empty tree");
    }
}
