//! Stack based walks over a subtree. None of these recurse, so a degenerate tree built from
//! sorted input is as safe to walk as a balanced one.

use crate::node::{NodeId, Nodes};

/// The order in which a traversal visits the nodes of a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Yields values in ascending order.
    InOrder,
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// Right subtree, then the node, then the left subtree. Yields values in descending
    /// order.
    ///
    /// Note this is not the textbook post-order (left, right, node).
    PostOrder,
}

/// Walks a subtree in order. When `mirrored`, left and right swap roles, which gives the
/// right, node, left sequence of [`Order::PostOrder`].
pub(crate) struct InOrderIds<'a, T> {
    nodes: &'a Nodes<T>,
    stack: Vec<NodeId>,
    mirrored: bool,
}

impl<'a, T> InOrderIds<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, root: Option<NodeId>, mirrored: bool) -> Self {
        let mut walk = Self {
            nodes,
            stack: Vec::new(),
            mirrored,
        };
        walk.push_spine(root);
        walk
    }

    fn near(&self, id: NodeId) -> Option<NodeId> {
        if self.mirrored {
            self.nodes.right(id)
        } else {
            self.nodes.left(id)
        }
    }

    fn far(&self, id: NodeId) -> Option<NodeId> {
        if self.mirrored {
            self.nodes.left(id)
        } else {
            self.nodes.right(id)
        }
    }

    /// Pushes `from` and every node reachable by following the near side down from it.
    fn push_spine(&mut self, from: Option<NodeId>) {
        let mut next = from;
        while let Some(id) = next {
            self.stack.push(id);
            next = self.near(id);
        }
    }
}

impl<'a, T> Iterator for InOrderIds<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let far = self.far(id);
        self.push_spine(far);
        Some(id)
    }
}

pub(crate) struct PreOrderIds<'a, T> {
    nodes: &'a Nodes<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrderIds<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, root: Option<NodeId>) -> Self {
        Self {
            nodes,
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrderIds<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Push right first so the left subtree comes out first.
        self.stack.extend(self.nodes.right(id));
        self.stack.extend(self.nodes.left(id));
        Some(id)
    }
}

/// Any of the walks, picked by [`Order`].
pub(crate) enum Walk<'a, T> {
    InOrder(InOrderIds<'a, T>),
    PreOrder(PreOrderIds<'a, T>),
}

impl<'a, T> Walk<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, root: Option<NodeId>, order: Order) -> Self {
        match order {
            Order::InOrder => Self::InOrder(InOrderIds::new(nodes, root, false)),
            Order::PreOrder => Self::PreOrder(PreOrderIds::new(nodes, root)),
            Order::PostOrder => Self::InOrder(InOrderIds::new(nodes, root, true)),
        }
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::InOrder(walk) => walk.next(),
            Self::PreOrder(walk) => walk.next(),
        }
    }
}

/// An iterator over the values of a subtree in ascending order.
///
/// Created by [`Tree::iter`][crate::Tree::iter] and [`NodeRef::iter`][crate::NodeRef::iter].
pub struct Iter<'a, T> {
    nodes: &'a Nodes<T>,
    ids: InOrderIds<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, root: Option<NodeId>) -> Self {
        Self {
            nodes,
            ids: InOrderIds::new(nodes, root, false),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        self.ids.next().map(|id| nodes.value(id))
    }
}
