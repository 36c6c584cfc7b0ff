//! Tests for TreeBuilder

use arbor::{TreeArena, TreeBuilder, TreeError};
use rstest::rstest;

fn build(preorder: &[i32], inorder: &[i32]) -> TreeArena<i32> {
    let mut builder = TreeBuilder::new();
    builder
        .build_from_traversals(preorder, inorder)
        .expect("build tree from traversals")
}

#[rstest]
#[case(vec![3, 9, 20, 15, 7], vec![9, 3, 15, 20, 7])]
#[case(vec![1, 2, 4, 5, 3, 6], vec![4, 2, 5, 1, 6, 3])]
#[case(vec![1, 2], vec![2, 1])]
#[case(vec![1], vec![1])]
fn given_valid_pair_when_building_then_traversals_roundtrip(
    #[case] preorder: Vec<i32>,
    #[case] inorder: Vec<i32>,
) {
    // Act
    let tree = build(&preorder, &inorder);

    // Assert
    let rebuilt_preorder: Vec<i32> = tree.iter().map(|(_, node)| node.value).collect();
    let rebuilt_inorder: Vec<i32> = tree.iter_inorder().map(|(_, node)| node.value).collect();
    assert_eq!(rebuilt_preorder, preorder);
    assert_eq!(rebuilt_inorder, inorder);
}

#[test]
fn given_traversal_pair_when_building_then_structure_matches() {
    // Arrange
    //      3
    //     / \
    //    9   20
    //       /  \
    //      15   7
    let preorder = [3, 9, 20, 15, 7];
    let inorder = [9, 3, 15, 20, 7];

    // Act
    let tree = build(&preorder, &inorder);

    // Assert
    let root_idx = tree.root().expect("non-empty tree has a root");
    let root = tree.get_node(root_idx).unwrap();
    assert_eq!(root.value, 3);

    let left = tree.get_node(root.left.unwrap()).unwrap();
    assert_eq!(left.value, 9);
    assert!(left.is_leaf());

    let right = tree.get_node(root.right.unwrap()).unwrap();
    assert_eq!(right.value, 20);
    assert_eq!(tree.value_of(right.left.unwrap()), Some(&15));
    assert_eq!(tree.value_of(right.right.unwrap()), Some(&7));
}

#[test]
fn given_built_tree_when_checking_parents_then_links_are_consistent() {
    // Arrange
    let tree = build(&[1, 2, 4, 5, 3, 6], &[4, 2, 5, 1, 6, 3]);
    let root_idx = tree.root().unwrap();

    // Assert
    for (idx, node) in tree.iter() {
        match node.parent {
            Some(parent_idx) => {
                let parent = tree.get_node(parent_idx).unwrap();
                assert!(
                    parent.left == Some(idx) || parent.right == Some(idx),
                    "parent of {:?} does not point back at it",
                    node.value
                );
            }
            None => assert_eq!(idx, root_idx),
        }
    }
}

#[test]
fn given_empty_traversals_when_building_then_returns_empty_tree() {
    // Act
    let tree = build(&[], &[]);

    // Assert
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert_eq!(tree.len(), 0);
}

#[test]
fn given_mismatched_lengths_when_building_then_errors() {
    // Arrange
    let mut builder = TreeBuilder::new();

    // Act
    let result = builder.build_from_traversals(&[1, 2, 3], &[1, 2]);

    // Assert
    assert!(matches!(
        result,
        Err(TreeError::LengthMismatch {
            preorder: 3,
            inorder: 2
        })
    ));
}

#[test]
fn given_value_missing_from_inorder_when_building_then_errors() {
    // Arrange
    let mut builder = TreeBuilder::new();

    // Act
    let result = builder.build_from_traversals(&[1, 2], &[1, 3]);

    // Assert
    assert!(matches!(result, Err(TreeError::MalformedInput(_))));
}

#[test]
fn given_value_outside_subtree_window_when_building_then_errors() {
    // Arrange: permutations of each other, but no tree has this pair.
    // 2 would have to sit in 1's left window, yet inorder puts it right of 1.
    let mut builder = TreeBuilder::new();

    // Act
    let result = builder.build_from_traversals(&[1, 2, 3], &[3, 1, 2]);

    // Assert
    assert!(matches!(result, Err(TreeError::MalformedInput(_))));
}

#[test]
fn given_duplicate_values_when_building_then_errors() {
    // Arrange
    let mut builder = TreeBuilder::new();

    // Act
    let result = builder.build_from_traversals(&[2, 2], &[2, 2]);

    // Assert
    assert!(matches!(result, Err(TreeError::DuplicateValue(_))));
}

#[test]
fn given_reused_builder_when_building_again_then_cache_is_rebuilt() {
    // Arrange
    let mut builder = TreeBuilder::new();
    let first = builder
        .build_from_traversals(&[1, 2], &[2, 1])
        .expect("first build");

    // Act
    let second = builder
        .build_from_traversals(&[7, 8, 9], &[8, 7, 9])
        .expect("second build");

    // Assert
    assert_eq!(first.len(), 2);
    let values: Vec<i32> = second.iter().map(|(_, node)| node.value).collect();
    assert_eq!(values, vec![7, 8, 9]);
}

#[test]
fn given_string_values_when_building_then_queries_work() {
    // Arrange
    let mut builder = TreeBuilder::new();

    // Act
    let tree = builder
        .build_from_traversals(&["b", "a", "c"], &["a", "b", "c"])
        .expect("build string tree");

    // Assert
    assert_eq!(tree.height(), 2);
    assert!(tree.contains(&"a"));
    assert_eq!(tree.leaf_paths(), vec![vec!["b", "a"], vec!["b", "c"]]);
}
