//! Breadth-first level traversals over the tree arena.
//!
//! Kept apart from the recursive queries: everything here runs off a FIFO
//! queue of arena indices, one full level per iteration.

use std::collections::VecDeque;

use tracing::instrument;

use crate::arena::TreeArena;

impl<V: Clone> TreeArena<V> {
    /// Values grouped by depth level, each level left-to-right.
    #[instrument(level = "debug", skip(self))]
    pub fn level_order(&self) -> Vec<Vec<V>> {
        let mut result = Vec::new();
        let mut queue = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back(root);
        }

        while !queue.is_empty() {
            let width = queue.len();
            let mut level = Vec::with_capacity(width);
            for _ in 0..width {
                let idx = match queue.pop_front() {
                    Some(idx) => idx,
                    None => break,
                };
                if let Some(node) = self.get_node(idx) {
                    level.push(node.value.clone());
                    if let Some(left) = node.left {
                        queue.push_back(left);
                    }
                    if let Some(right) = node.right {
                        queue.push_back(right);
                    }
                }
            }
            result.push(level);
        }

        result
    }

    /// Spiral (zigzag) level order.
    ///
    /// Even levels read left-to-right, odd levels right-to-left, with the
    /// root counting as level 0. The direction flip only affects how each
    /// level buffer is filled; the queue itself always drains left-to-right.
    #[instrument(level = "debug", skip(self))]
    pub fn spiral_order(&self) -> Vec<Vec<V>> {
        let mut result = Vec::new();
        let mut queue = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back(root);
        }

        let mut left_to_right = true;
        while !queue.is_empty() {
            // Snapshot the level size before children get enqueued
            let width = queue.len();
            let mut level = VecDeque::with_capacity(width);
            for _ in 0..width {
                let idx = match queue.pop_front() {
                    Some(idx) => idx,
                    None => break,
                };
                if let Some(node) = self.get_node(idx) {
                    if left_to_right {
                        level.push_back(node.value.clone());
                    } else {
                        level.push_front(node.value.clone());
                    }
                    if let Some(left) = node.left {
                        queue.push_back(left);
                    }
                    if let Some(right) = node.right {
                        queue.push_back(right);
                    }
                }
            }
            result.push(level.into_iter().collect());
            left_to_right = !left_to_right;
        }

        result
    }
}
