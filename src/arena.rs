use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Child slot a node occupies under its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSlot {
    Left,
    Right,
}

/// Tree node in the arena-based binary tree.
#[derive(Debug)]
pub struct TreeNode<V> {
    /// Value stored at this node
    pub value: V,
    /// Index of the parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Index of the left child
    pub left: Option<Index>,
    /// Index of the right child
    pub right: Option<Index>,
}

impl<V> TreeNode<V> {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-based binary tree.
///
/// Uses a generational arena for memory-safe node references and O(1) lookups.
/// A tree is built once from a traversal pair and read-only afterwards: every
/// query takes `&self`, so a built tree can be shared between readers freely.
#[derive(Debug)]
pub struct TreeArena<V> {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode<V>>,
    /// Index of the root node, None for the empty tree
    root: Option<Index>,
}

impl<V> Default for TreeArena<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TreeArena<V> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a node under `parent`, wiring the chosen child slot.
    /// Inserting with `parent: None` makes the node the root.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert_node(&mut self, value: V, parent: Option<(Index, ChildSlot)>) -> Index {
        let node = TreeNode {
            value,
            parent: parent.map(|(parent_idx, _)| parent_idx),
            left: None,
            right: None,
        };
        let node_idx = self.arena.insert(node);

        match parent {
            Some((parent_idx, slot)) => {
                if let Some(parent) = self.arena.get_mut(parent_idx) {
                    match slot {
                        ChildSlot::Left => parent.left = Some(node_idx),
                        ChildSlot::Right => parent.right = Some(node_idx),
                    }
                }
            }
            None => self.root = Some(node_idx),
        }

        node_idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<V>> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode<V>> {
        self.arena.get_mut(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    pub fn value_of(&self, idx: Index) -> Option<&V> {
        self.arena.get(idx).map(|node| &node.value)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIterator<'_, V> {
        PreOrderIterator::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_inorder(&self) -> InOrderIterator<'_, V> {
        InOrderIterator::new(self)
    }

    /// Height of the tree: 0 for the empty tree, 1 for a single leaf.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        if let Some(root) = self.root {
            self.node_height(root)
        } else {
            0
        }
    }

    fn node_height(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + self.slot_height(node.left).max(self.slot_height(node.right))
        } else {
            0
        }
    }

    fn slot_height(&self, child: Option<Index>) -> usize {
        child.map(|idx| self.node_height(idx)).unwrap_or(0)
    }

    /// Height and diameter in a single post-order pass.
    ///
    /// Diameter counts the nodes on the longest path between any two nodes,
    /// so the empty tree is `(0, 0)` and a single node `(1, 1)`. The best
    /// path need not pass through the root: each node combines the spine
    /// through itself with the best diameter of either subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn height_and_diameter(&self) -> (usize, usize) {
        if let Some(root) = self.root {
            self.measure(root)
        } else {
            (0, 0)
        }
    }

    fn measure(&self, node_idx: Index) -> (usize, usize) {
        let node = match self.get_node(node_idx) {
            Some(node) => node,
            None => return (0, 0),
        };
        let (left_height, left_diameter) =
            node.left.map(|idx| self.measure(idx)).unwrap_or((0, 0));
        let (right_height, right_diameter) =
            node.right.map(|idx| self.measure(idx)).unwrap_or((0, 0));

        let height = 1 + left_height.max(right_height);
        let diameter = (left_height + right_height + 1)
            .max(left_diameter)
            .max(right_diameter);
        (height, diameter)
    }

    /// A tree is balanced iff every node's subtree heights differ by at most 1.
    /// The empty tree is balanced.
    #[instrument(level = "debug", skip(self))]
    pub fn is_balanced(&self) -> bool {
        match self.root {
            Some(root) => self.check_balance(root).1,
            None => true,
        }
    }

    fn check_balance(&self, node_idx: Index) -> (usize, bool) {
        let node = match self.get_node(node_idx) {
            Some(node) => node,
            None => return (0, true),
        };
        let (left_height, left_balanced) = node
            .left
            .map(|idx| self.check_balance(idx))
            .unwrap_or((0, true));
        let (right_height, right_balanced) = node
            .right
            .map(|idx| self.check_balance(idx))
            .unwrap_or((0, true));

        let balanced = left_balanced && right_balanced && left_height.abs_diff(right_height) <= 1;
        (1 + left_height.max(right_height), balanced)
    }
}

impl<V: PartialEq + fmt::Debug> TreeArena<V> {
    /// Index of the node holding `value`, located by a preorder scan.
    #[instrument(level = "trace", skip(self, value))]
    pub fn find(&self, value: &V) -> Option<Index> {
        self.iter()
            .find(|(_, node)| node.value == *value)
            .map(|(idx, _)| idx)
    }

    pub fn contains(&self, value: &V) -> bool {
        self.find(value).is_some()
    }

    /// Lowest common ancestor of the nodes holding `p` and `q`.
    ///
    /// Both operands must be present in the tree; a missing operand (or an
    /// empty tree) is a [`TreeError::ValueNotFound`]. The query is symmetric
    /// in its operands, and the LCA of a value with itself is its own node.
    #[instrument(level = "debug", skip(self, p, q))]
    pub fn lowest_common_ancestor(&self, p: &V, q: &V) -> TreeResult<Index> {
        for operand in [p, q] {
            if !self.contains(operand) {
                return Err(TreeError::ValueNotFound(format!("{operand:?}")));
            }
        }

        // Both operands verified present, so the walk cannot come up empty
        self.root
            .and_then(|root| self.lca_walk(root, p, q))
            .ok_or_else(|| TreeError::ValueNotFound(format!("{p:?}")))
    }

    fn lca_walk(&self, node_idx: Index, p: &V, q: &V) -> Option<Index> {
        let node = self.get_node(node_idx)?;
        if node.value == *p || node.value == *q {
            return Some(node_idx);
        }

        let left = node.left.and_then(|idx| self.lca_walk(idx, p, q));
        let right = node.right.and_then(|idx| self.lca_walk(idx, p, q));
        match (left, right) {
            // Operands split across both subtrees: this node is the ancestor
            (Some(_), Some(_)) => Some(node_idx),
            (left, right) => left.or(right),
        }
    }
}

impl<V: Clone> TreeArena<V> {
    /// Root-to-leaf paths in left-to-right leaf order.
    ///
    /// One path per leaf, root first. Empty trees have no leaves and
    /// produce an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_paths(&self) -> Vec<Vec<V>> {
        let mut paths = Vec::new();
        if let Some(root) = self.root {
            let mut buffer = Vec::new();
            self.collect_paths(root, &mut buffer, &mut paths);
        }
        paths
    }

    fn collect_paths(&self, node_idx: Index, buffer: &mut Vec<V>, paths: &mut Vec<Vec<V>>) {
        let node = match self.get_node(node_idx) {
            Some(node) => node,
            None => return,
        };

        buffer.push(node.value.clone());
        if node.is_leaf() {
            paths.push(buffer.clone());
        } else {
            if let Some(left) = node.left {
                self.collect_paths(left, buffer, paths);
            }
            if let Some(right) = node.right {
                self.collect_paths(right, buffer, paths);
            }
        }
        // Single exit point keeps the shared buffer balanced across siblings
        buffer.pop();
    }
}

pub struct PreOrderIterator<'a, V> {
    arena: &'a TreeArena<V>,
    stack: Vec<Index>,
}

impl<'a, V> PreOrderIterator<'a, V> {
    fn new(arena: &'a TreeArena<V>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a, V> Iterator for PreOrderIterator<'a, V> {
    type Item = (Index, &'a TreeNode<V>);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push right first so the left subtree drains before it
                if let Some(right) = node.right {
                    self.stack.push(right);
                }
                if let Some(left) = node.left {
                    self.stack.push(left);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct InOrderIterator<'a, V> {
    arena: &'a TreeArena<V>,
    stack: Vec<Index>,
    descent: Option<Index>,
}

impl<'a, V> InOrderIterator<'a, V> {
    fn new(arena: &'a TreeArena<V>) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            descent: arena.root(),
        }
    }
}

impl<'a, V> Iterator for InOrderIterator<'a, V> {
    type Item = (Index, &'a TreeNode<V>);

    fn next(&mut self) -> Option<Self::Item> {
        // Walk the left spine down from the pending node, then visit
        while let Some(idx) = self.descent {
            self.stack.push(idx);
            self.descent = self.arena.get_node(idx).and_then(|node| node.left);
        }

        let visited_idx = self.stack.pop()?;
        let node = self.arena.get_node(visited_idx)?;
        self.descent = node.right;
        Some((visited_idx, node))
    }
}
