//! Construction and query errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("traversal length mismatch: preorder has {preorder} values, inorder has {inorder}")]
    LengthMismatch { preorder: usize, inorder: usize },

    #[error("malformed traversal pair: {0} has no position in the inorder window")]
    MalformedInput(String),

    #[error("duplicate value in traversal input: {0}")]
    DuplicateValue(String),

    #[error("value not found in tree: {0}")]
    ValueNotFound(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
