//! Node storage. Every node of a [`Tree`][crate::Tree] lives in a generational arena and
//! refers to its parent and children by [`NodeId`]. The child links are the owning ones:
//! exactly one node (or the tree's root slot) points at any given node through them. The
//! parent link is only ever used to navigate upwards.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use generational_arena::{Arena, Index};

/// Hands out a distinct identity to every node store, clones included.
static NEXT_STORE: AtomicU64 = AtomicU64::new(0);

fn next_store() -> u64 {
    NEXT_STORE.fetch_add(1, AtomicOrdering::Relaxed)
}

/// A stable handle to one node of a [`Tree`][crate::Tree].
///
/// Ids are generation checked: once a node is removed its id never names another node,
/// even if the storage slot gets reused. They also remember which tree they came from, so
/// another tree (a clone included) never mistakes them for one of its own nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    store: u64,
    index: Index,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

#[derive(Debug)]
pub(crate) struct Nodes<T> {
    store: u64,
    arena: Arena<Node<T>>,
}

impl<T> Nodes<T> {
    pub(crate) fn new() -> Self {
        Self {
            store: next_store(),
            arena: Arena::new(),
        }
    }

    /// The id naming the same slot as `id` in this store.
    pub(crate) fn adopt(&self, id: NodeId) -> NodeId {
        NodeId {
            store: self.store,
            index: id.index,
        }
    }

    /// How many nodes are currently stored.
    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether `id` names a live node of this store. Ids of removed nodes and ids handed out
    /// by any other store are rejected.
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        id.store == self.store && self.arena.contains(id.index)
    }

    /// Stores a new childless node under `parent`. The caller links it into the parent.
    pub(crate) fn alloc(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let index = self.arena.insert(Node {
            value,
            parent,
            left: None,
            right: None,
        });
        NodeId {
            store: self.store,
            index,
        }
    }

    /// Frees a node that has already been detached and hands back its value.
    pub(crate) fn free(&mut self, id: NodeId) -> Option<T> {
        if cfg!(debug_assertions) {
            if let Some(node) = self.arena.get(id.index) {
                assert!(node.parent.is_none() && node.left.is_none() && node.right.is_none());
            }
        }
        self.arena.remove(id.index).map(|node| node.value)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.arena[id.index]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.arena[id.index]
    }

    pub(crate) fn value(&self, id: NodeId) -> &T {
        &self.node(id).value
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub(crate) fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).left
    }

    pub(crate) fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).right
    }

    pub(crate) fn is_left_child(&self, id: NodeId) -> bool {
        self.parent(id)
            .is_some_and(|parent| self.left(parent) == Some(id))
    }

    pub(crate) fn is_right_child(&self, id: NodeId) -> bool {
        self.parent(id)
            .is_some_and(|parent| self.right(parent) == Some(id))
    }

    /// Makes `child` the left subtree of `id`, fixing the child's parent link.
    pub(crate) fn attach_left(&mut self, id: NodeId, child: Option<NodeId>) {
        self.node_mut(id).left = child;
        if let Some(child) = child {
            self.node_mut(child).parent = Some(id);
        }
    }

    /// Makes `child` the right subtree of `id`, fixing the child's parent link.
    pub(crate) fn attach_right(&mut self, id: NodeId, child: Option<NodeId>) {
        self.node_mut(id).right = child;
        if let Some(child) = child {
            self.node_mut(child).parent = Some(id);
        }
    }

    /// Points the parent of `id` at `replacement` instead, on whichever side `id` hangs.
    /// The replacement's parent link becomes `id`'s parent (`None` when `id` is the root).
    pub(crate) fn reconnect_parent(&mut self, id: NodeId, replacement: Option<NodeId>) {
        let parent = self.parent(id);
        if let Some(parent) = parent {
            if self.is_left_child(id) {
                self.node_mut(parent).left = replacement;
            } else {
                self.node_mut(parent).right = replacement;
            }
        }
        if let Some(replacement) = replacement {
            self.node_mut(replacement).parent = parent;
        }
    }

    /// Clears every link of `id`. Other nodes aren't touched.
    pub(crate) fn detach(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        node.parent = None;
        node.left = None;
        node.right = None;
    }

    pub(crate) fn minimum(&self, id: NodeId) -> NodeId {
        let mut node = id;
        while let Some(next) = self.left(node) {
            node = next;
        }
        node
    }

    pub(crate) fn maximum(&self, id: NodeId) -> NodeId {
        let mut node = id;
        while let Some(next) = self.right(node) {
            node = next;
        }
        node
    }

    /// Follows parent links up from `id` until reaching a node without a parent.
    pub(crate) fn topmost(&self, id: NodeId) -> NodeId {
        let mut node = id;
        while let Some(parent) = self.parent(node) {
            node = parent;
        }
        node
    }

    /// Finds the node holding `value` in the subtree rooted at `id`.
    pub(crate) fn search(&self, id: NodeId, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut node = id;
        loop {
            match value.cmp(self.value(node)) {
                Ordering::Equal => return Some(node),
                Ordering::Greater => node = self.right(node)?,
                Ordering::Less => node = self.left(node)?,
            }
        }
    }
}

/// A copy of the nodes under a fresh identity. Every link is rewritten to the new identity, so
/// ids of the original are foreign to the copy and vice versa.
impl<T> Clone for Nodes<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut copy = Self {
            store: next_store(),
            arena: self.arena.clone(),
        };
        let store = copy.store;
        let adopt = |id: Option<NodeId>| id.map(|id| NodeId { store, index: id.index });
        for (_, node) in copy.arena.iter_mut() {
            node.parent = adopt(node.parent);
            node.left = adopt(node.left);
            node.right = adopt(node.right);
        }
        copy
    }
}
