//! Balancing strategies. A [`Strategy`] decides how `insert` and `remove` reshape the tree.
//!
//! Each variant is backed by a policy type implementing [`Balance`]. Only the plain,
//! unbalanced policy does real work today; [`Strategy::Avl`] and [`Strategy::RedBlack`] are
//! selectable so trees can already be built with them, but they route to the plain policy
//! until their rotations are written.

use tracing::debug;

use crate::node::{NodeId, Nodes};
use crate::plain::PlainPolicy;
use crate::util::RemoveResult;

/// The balancing policy used by a [`Tree`][crate::Tree].
///
/// A tree keeps the strategy it was built with. Use
/// [`Tree::rebalance`][crate::Tree::rebalance] to get a copy built with another one.
///
/// # Examples
///
/// ```
/// use pluggable_bst::{Strategy, Tree};
///
/// let tree = Tree::from_values_with_strategy([3, 2, 1], Strategy::Avl).unwrap();
/// assert_eq!(tree.strategy(), Strategy::Avl);
/// assert_eq!(Strategy::default(), Strategy::Unbalanced);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A plain binary search tree. The shape depends only on insertion order.
    #[default]
    Unbalanced,
    /// AVL balancing. Not implemented yet: behaves like [`Strategy::Unbalanced`].
    Avl,
    /// Red-black balancing. Not implemented yet: behaves like [`Strategy::Unbalanced`].
    RedBlack,
}

/// The operations a balancing policy has to provide.
///
/// Policies get the whole node store plus the id of the subtree root they work on. A policy
/// that rotates may move another node above `root`, so callers re-derive the root from parent
/// links afterwards.
pub(crate) trait Balance {
    /// Inserts `value` below `root` and returns the new node, or `None` if the value was
    /// already present.
    fn insert<T: Ord>(&self, nodes: &mut Nodes<T>, root: NodeId, value: T) -> Option<NodeId>;

    /// Unlinks `node` from the tree, returning the node that took its place.
    fn remove_node<T>(&self, nodes: &mut Nodes<T>, node: NodeId) -> Option<NodeId>;

    /// Finds `value` below `root` and unlinks its node.
    fn remove<T: Ord>(&self, nodes: &mut Nodes<T>, root: NodeId, value: &T) -> RemoveResult {
        match nodes.search(root, value) {
            Some(removed) => RemoveResult::Detached {
                removed,
                replacement: self.remove_node(nodes, removed),
            },
            None => RemoveResult::NotFound,
        }
    }
}

/// Placeholder for AVL balancing.
pub(crate) struct AvlPolicy;

impl Balance for AvlPolicy {
    fn insert<T: Ord>(&self, nodes: &mut Nodes<T>, root: NodeId, value: T) -> Option<NodeId> {
        debug!("AVL rotations aren't implemented; inserting without rebalancing");
        PlainPolicy.insert(nodes, root, value)
    }

    fn remove_node<T>(&self, nodes: &mut Nodes<T>, node: NodeId) -> Option<NodeId> {
        debug!("AVL rotations aren't implemented; removing without rebalancing");
        PlainPolicy.remove_node(nodes, node)
    }
}

/// Placeholder for red-black balancing.
pub(crate) struct RedBlackPolicy;

impl Balance for RedBlackPolicy {
    fn insert<T: Ord>(&self, nodes: &mut Nodes<T>, root: NodeId, value: T) -> Option<NodeId> {
        debug!("red-black recoloring isn't implemented; inserting without rebalancing");
        PlainPolicy.insert(nodes, root, value)
    }

    fn remove_node<T>(&self, nodes: &mut Nodes<T>, node: NodeId) -> Option<NodeId> {
        debug!("red-black recoloring isn't implemented; removing without rebalancing");
        PlainPolicy.remove_node(nodes, node)
    }
}

impl Strategy {
    pub(crate) fn insert<T: Ord>(
        self,
        nodes: &mut Nodes<T>,
        root: NodeId,
        value: T,
    ) -> Option<NodeId> {
        match self {
            Self::Unbalanced => PlainPolicy.insert(nodes, root, value),
            Self::Avl => AvlPolicy.insert(nodes, root, value),
            Self::RedBlack => RedBlackPolicy.insert(nodes, root, value),
        }
    }

    pub(crate) fn remove<T: Ord>(
        self,
        nodes: &mut Nodes<T>,
        root: NodeId,
        value: &T,
    ) -> RemoveResult {
        match self {
            Self::Unbalanced => PlainPolicy.remove(nodes, root, value),
            Self::Avl => AvlPolicy.remove(nodes, root, value),
            Self::RedBlack => RedBlackPolicy.remove(nodes, root, value),
        }
    }

    pub(crate) fn remove_node<T>(self, nodes: &mut Nodes<T>, node: NodeId) -> Option<NodeId> {
        match self {
            Self::Unbalanced => PlainPolicy.remove_node(nodes, node),
            Self::Avl => AvlPolicy.remove_node(nodes, node),
            Self::RedBlack => RedBlackPolicy.remove_node(nodes, node),
        }
    }
}
