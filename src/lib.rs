//! Binary tree query toolkit.
//!
//! Reconstructs a binary tree from a (preorder, inorder) traversal pair and
//! answers structural queries over it: height and diameter, balance check,
//! lowest common ancestor, root-to-leaf paths, and spiral level order.
//!
//! Trees are stored in a generational arena and are read-only once built.

pub mod arena;
pub mod builder;
pub mod display;
pub mod errors;
mod levels;

pub use arena::{ChildSlot, InOrderIterator, PreOrderIterator, TreeArena, TreeNode};
pub use builder::TreeBuilder;
pub use display::TreeRender;
pub use errors::{TreeError, TreeResult};
