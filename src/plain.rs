//! The plain binary search tree policy. No rebalancing happens, so the shape of the tree is
//! decided entirely by the order values arrive in.

use std::cmp::Ordering;

use tracing::trace;

use crate::node::{NodeId, Nodes};
use crate::strategy::Balance;

pub(crate) struct PlainPolicy;

impl Balance for PlainPolicy {
    fn insert<T: Ord>(&self, nodes: &mut Nodes<T>, root: NodeId, value: T) -> Option<NodeId> {
        let mut node = root;
        loop {
            match value.cmp(nodes.value(node)) {
                Ordering::Equal => {
                    trace!("value already present, nothing inserted");
                    return None;
                }
                Ordering::Less => match nodes.left(node) {
                    Some(left) => node = left,
                    None => {
                        let new_left = nodes.alloc(value, Some(node));
                        nodes.attach_left(node, Some(new_left));
                        return Some(new_left);
                    }
                },
                Ordering::Greater => match nodes.right(node) {
                    Some(right) => node = right,
                    None => {
                        let new_right = nodes.alloc(value, Some(node));
                        nodes.attach_right(node, Some(new_right));
                        return Some(new_right);
                    }
                },
            }
        }
    }

    /// Replaces `node` with the smallest node of its right subtree or, failing that, the
    /// largest node of its left subtree. The replacement is an extremum so it has at most one
    /// child, and it is unlinked the same way before taking `node`'s place, which hands that
    /// child to its old parent.
    ///
    /// The replacements form a chain that ends at a leaf. The chain is collected first and
    /// then unlinked from the bottom up, so removal doesn't recurse with the tree's height.
    fn remove_node<T>(&self, nodes: &mut Nodes<T>, node: NodeId) -> Option<NodeId> {
        let mut chain = vec![node];
        let mut last = node;
        while let Some(next) = replacement_for(nodes, last) {
            chain.push(next);
            last = next;
        }
        let replacement = chain.get(1).copied();

        let mut below = None;
        while let Some(current) = chain.pop() {
            if let Some(below) = below {
                // Read the children now: `below` may have been one of them.
                let left = nodes.left(current);
                let right = nodes.right(current);
                nodes.attach_left(below, left);
                nodes.attach_right(below, right);
            }
            nodes.reconnect_parent(current, below);
            nodes.detach(current);
            below = Some(current);
        }

        replacement
    }
}

/// The node that takes `node`'s place when it is removed, `None` for a leaf.
fn replacement_for<T>(nodes: &Nodes<T>, node: NodeId) -> Option<NodeId> {
    match (nodes.left(node), nodes.right(node)) {
        (_, Some(right)) => Some(nodes.minimum(right)),
        (Some(left), None) => Some(nodes.maximum(left)),
        (None, None) => None,
    }
}
