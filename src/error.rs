//! Errors reported by [`Tree`][crate::Tree] operations.

use thiserror::Error;

use crate::node::NodeId;

/// Everything that can go wrong when building or mutating a [`Tree`][crate::Tree].
///
/// Inserting a value that is already present, or removing one that is absent, is
/// *not* an error. Those calls succeed and leave the tree unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A tree always starts with a root, so it can't be built from nothing.
    #[error("cannot build a tree from an empty sequence")]
    EmptySequence,

    /// The id doesn't name a live node of this tree. It was either removed already or
    /// came from another tree.
    #[error("node {0:?} is not part of this tree")]
    UnknownNode(NodeId),
}

/// Shorthand for results of fallible [`Tree`][crate::Tree] operations.
pub type TreeResult<T> = Result<T, TreeError>;
