use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::{ChildSlot, TreeArena};
use crate::errors::{TreeError, TreeResult};

/// Builds a binary tree from a (preorder, inorder) traversal pair.
///
/// Reconstruction is value-keyed: the inorder position of each preorder root
/// splits the inorder sequence into the left and right subtree windows, so
/// values must be unique within one traversal pair. Duplicates are rejected
/// up front instead of silently producing a wrong tree.
pub struct TreeBuilder<V> {
    position_cache: HashMap<V, usize>,
}

impl<V: Clone + Eq + Hash + fmt::Debug> Default for TreeBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash + fmt::Debug> TreeBuilder<V> {
    pub fn new() -> Self {
        Self {
            position_cache: HashMap::new(),
        }
    }

    /// Reconstruct the tree described by `preorder` and `inorder`.
    ///
    /// The slices must be permutations of each other; empty inputs produce
    /// the empty tree. The caller's data is never mutated: preorder
    /// consumption is tracked by a cursor advanced across the recursion.
    #[instrument(level = "debug", skip(self, preorder, inorder))]
    pub fn build_from_traversals(
        &mut self,
        preorder: &[V],
        inorder: &[V],
    ) -> TreeResult<TreeArena<V>> {
        if preorder.len() != inorder.len() {
            return Err(TreeError::LengthMismatch {
                preorder: preorder.len(),
                inorder: inorder.len(),
            });
        }

        self.index_inorder(inorder)?;

        let mut tree = TreeArena::new();
        let mut cursor = 0;
        self.build_subtree(&mut tree, None, preorder, &mut cursor, 0, inorder.len())?;
        Ok(tree)
    }

    /// Cache the inorder position of every value, rejecting duplicates.
    #[instrument(level = "debug", skip(self, inorder))]
    fn index_inorder(&mut self, inorder: &[V]) -> TreeResult<()> {
        self.position_cache.clear();
        for (position, value) in inorder.iter().enumerate() {
            if self.position_cache.insert(value.clone(), position).is_some() {
                return Err(TreeError::DuplicateValue(format!("{value:?}")));
            }
        }
        Ok(())
    }

    /// Build the subtree covering the inorder window `[lo, hi)`.
    ///
    /// `cursor` advances left-to-right through `preorder` across the whole
    /// recursion, so the left subtree must be built before the right one:
    /// its nodes are consumed immediately after their root.
    fn build_subtree(
        &self,
        tree: &mut TreeArena<V>,
        parent: Option<(Index, ChildSlot)>,
        preorder: &[V],
        cursor: &mut usize,
        lo: usize,
        hi: usize,
    ) -> TreeResult<()> {
        if lo == hi {
            return Ok(());
        }

        let root_value = &preorder[*cursor];
        let position = match self.position_cache.get(root_value) {
            Some(&position) if lo <= position && position < hi => position,
            _ => return Err(TreeError::MalformedInput(format!("{root_value:?}"))),
        };
        *cursor += 1;

        let node_idx = tree.insert_node(root_value.clone(), parent);
        self.build_subtree(
            tree,
            Some((node_idx, ChildSlot::Left)),
            preorder,
            cursor,
            lo,
            position,
        )?;
        self.build_subtree(
            tree,
            Some((node_idx, ChildSlot::Right)),
            preorder,
            cursor,
            position + 1,
            hi,
        )?;
        Ok(())
    }
}
