//! A binary search tree of distinct values whose nodes know their parent as well as their
//! children, with the shape-keeping policy chosen per tree.
//!
//! ## Ordering
//!
//! Every value in a node's left subtree is smaller than the node's own value and every value
//! in its right subtree is greater. Inserting a value that is already stored is a no-op, as
//! is removing one that isn't. Removing a node with children moves the smallest node of its
//! right subtree into its place, or the largest node of its left subtree when there is no
//! right subtree.
//!
//! ## Strategies
//!
//! Lookups cost as much as the path from the root, and without balancing that path is
//! whatever the insertion order made it: a chain, for values inserted in sorted order. A
//! [`Strategy`] picks how `insert` and `remove` reshape the tree. [`Strategy::Unbalanced`]
//! leaves the shape alone. [`Strategy::Avl`] and [`Strategy::RedBlack`] can be selected but
//! behave like the unbalanced tree for now. [`Tree::rebalance`] rebuilds a tree under
//! another strategy.
//!
//! ## Ids and views
//!
//! Nodes live in an arena owned by their [`Tree`]. Child links own, the parent link only
//! navigates, so there are no reference cycles. A [`NodeId`] names one node of one tree and
//! stops working once that node is removed; handing it to any other tree is an error too. A
//! [`NodeRef`] borrows the tree to look at a node and the subtree below it.
//!
//! Nothing here recurses with the height of the tree, so degenerate trees are safe to walk,
//! print and remove from.
//!
//! # Examples
//!
//! ```
//! use pluggable_bst::Tree;
//!
//! let mut tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
//!
//! assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(tree.filter(|v| v % 2 != 0), vec![1, 3, 5]);
//!
//! tree.remove(&3);
//! assert_eq!(tree.to_vec(), vec![1, 2, 4, 5]);
//! assert!(!tree.contains(&3));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod node_ref;
mod plain;
mod strategy;
mod traverse;
mod tree;
mod util;


pub use error::{TreeError, TreeResult};
pub use node::NodeId;
pub use node_ref::NodeRef;
pub use strategy::Strategy;
pub use traverse::{Iter, Order};
pub use tree::{Removed, Tree};
