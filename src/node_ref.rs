//! Read-only views of a node and the subtree hanging from it.

use std::convert::Infallible;
use std::fmt;

use crate::node::{NodeId, Nodes};
use crate::traverse::{InOrderIds, Iter, Order, PreOrderIds, Walk};

/// A borrowed view of one node of a [`Tree`][crate::Tree] and the subtree rooted at it.
///
/// A `NodeRef` borrows the tree, so the tree can't be mutated while one is alive. Use
/// [`NodeRef::id`] to refer to the node across mutations.
///
/// # Examples
///
/// ```
/// use pluggable_bst::Tree;
///
/// let tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
/// let two = tree.search(&2).unwrap();
///
/// assert!(two.is_left_child());
/// assert_eq!(two.parent().map(|p| *p.value()), Some(3));
/// assert_eq!(two.count(), 2);
/// assert_eq!(two.to_vec(), vec![1, 2]);
/// ```
pub struct NodeRef<'a, T> {
    nodes: &'a Nodes<T>,
    id: NodeId,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, id: NodeId) -> Self {
        Self { nodes, id }
    }

    fn at(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.nodes, id))
    }

    /// The id of this node, stable until the node is removed.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        self.nodes.value(self.id)
    }

    /// The parent of this node, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.at(self.nodes.parent(self.id))
    }

    /// The root of the left subtree, holding every smaller value.
    pub fn left(&self) -> Option<Self> {
        self.at(self.nodes.left(self.id))
    }

    /// The root of the right subtree, holding every greater value.
    pub fn right(&self) -> Option<Self> {
        self.at(self.nodes.right(self.id))
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.nodes.parent(self.id).is_none()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        !self.has_any_child()
    }

    /// Whether this node is its parent's left child.
    pub fn is_left_child(&self) -> bool {
        self.nodes.is_left_child(self.id)
    }

    /// Whether this node is its parent's right child.
    pub fn is_right_child(&self) -> bool {
        self.nodes.is_right_child(self.id)
    }

    /// Whether this node has a left child.
    pub fn has_left_child(&self) -> bool {
        self.nodes.left(self.id).is_some()
    }

    /// Whether this node has a right child.
    pub fn has_right_child(&self) -> bool {
        self.nodes.right(self.id).is_some()
    }

    /// Whether this node has at least one child.
    pub fn has_any_child(&self) -> bool {
        self.has_left_child() || self.has_right_child()
    }

    /// Whether this node has two children.
    pub fn has_both_children(&self) -> bool {
        self.has_left_child() && self.has_right_child()
    }

    /// The number of nodes in this subtree, this node included.
    pub fn count(&self) -> usize {
        PreOrderIds::new(self.nodes, Some(self.id)).count()
    }

    /// The number of nodes on the longest path from this node down to a leaf. A leaf has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.id, 1)];
        while let Some((id, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(self.nodes.left(id).map(|left| (left, level + 1)));
            stack.extend(self.nodes.right(id).map(|right| (right, level + 1)));
        }
        height
    }

    /// The number of edges between this node and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.id;
        while let Some(parent) = self.nodes.parent(node) {
            depth += 1;
            node = parent;
        }
        depth
    }

    /// The node with the smallest value in this subtree.
    pub fn minimum(&self) -> Self {
        Self::new(self.nodes, self.nodes.minimum(self.id))
    }

    /// The node with the largest value in this subtree.
    pub fn maximum(&self) -> Self {
        Self::new(self.nodes, self.nodes.maximum(self.id))
    }

    /// Finds the node holding `value` in this subtree.
    pub fn search(&self, value: &T) -> Option<Self>
    where
        T: Ord,
    {
        self.at(self.nodes.search(self.id, value))
    }

    /// Whether `value` is stored in this subtree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.nodes.search(self.id, value).is_some()
    }

    /// Iterates over the values of this subtree in ascending order.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.nodes, Some(self.id))
    }

    /// Calls `visit` on every value of this subtree in the given [`Order`], stopping at the
    /// first error and returning it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pluggable_bst::{Order, Tree};
    ///
    /// let tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
    /// let mut seen = Vec::new();
    /// let result = tree.try_traverse(Order::PreOrder, |v| {
    ///     if *v == 1 {
    ///         return Err("found 1");
    ///     }
    ///     seen.push(*v);
    ///     Ok(())
    /// });
    ///
    /// assert_eq!(result, Err("found 1"));
    /// assert_eq!(seen, vec![3, 2]);
    /// ```
    pub fn try_traverse<E, F>(&self, order: Order, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&'a T) -> Result<(), E>,
    {
        let nodes = self.nodes;
        Walk::new(nodes, Some(self.id), order).try_for_each(|id| visit(nodes.value(id)))
    }

    fn traverse<F>(&self, order: Order, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        let result: Result<(), Infallible> = self.try_traverse(order, |v| {
            visit(v);
            Ok(())
        });
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Visits the left subtree, then this node, then the right subtree.
    pub fn traverse_in_order<F: FnMut(&'a T)>(&self, visit: F) {
        self.traverse(Order::InOrder, visit);
    }

    /// Visits this node, then the left subtree, then the right subtree.
    pub fn traverse_pre_order<F: FnMut(&'a T)>(&self, visit: F) {
        self.traverse(Order::PreOrder, visit);
    }

    /// Visits the right subtree, then this node, then the left subtree. See
    /// [`Order::PostOrder`].
    pub fn traverse_post_order<F: FnMut(&'a T)>(&self, visit: F) {
        self.traverse(Order::PostOrder, visit);
    }

    /// Applies `transform` to every value in ascending order and collects the results.
    pub fn map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
    {
        self.iter().map(transform).collect()
    }

    /// Collects, in ascending order, the values for which `predicate` holds.
    pub fn filter<F>(&self, mut predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|v| predicate(v)).cloned().collect()
    }

    /// Folds the values in ascending order with a fallible `combine`. The first error ends the
    /// fold and is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pluggable_bst::Tree;
    ///
    /// let tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
    ///
    /// let sum = tree.reduce(0u8, |acc, v| acc.checked_add(*v).ok_or("overflow"));
    /// assert_eq!(sum, Ok(15));
    ///
    /// let product = tree.reduce(50u8, |acc, v| acc.checked_mul(*v).ok_or("overflow"));
    /// assert_eq!(product, Err("overflow"));
    /// ```
    pub fn reduce<R, E, F>(&self, initial: R, combine: F) -> Result<R, E>
    where
        F: FnMut(R, &'a T) -> Result<R, E>,
    {
        self.iter().try_fold(initial, combine)
    }

    /// Folds the values in ascending order.
    pub fn fold<R, F>(&self, initial: R, combine: F) -> R
    where
        F: FnMut(R, &'a T) -> R,
    {
        self.iter().fold(initial, combine)
    }

    /// The values of this subtree in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for NodeRef<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the subtree as `<left>"<- "value" ->"<right>`, e.g. `1<- 2<- 3 ->4 ->5`. This is
/// meant for eyeballing a tree's shape, not for parsing.
impl<'a, T> fmt::Display for NodeRef<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Each node's arrows sit right next to its own value, so writing nodes in order
        // reproduces the nested rendering without recursing.
        for id in InOrderIds::new(self.nodes, Some(self.id), false) {
            if self.nodes.left(id).is_some() {
                f.write_str("<- ")?;
            }
            write!(f, "{}", self.nodes.value(id))?;
            if self.nodes.right(id).is_some() {
                f.write_str(" ->")?;
            }
        }
        Ok(())
    }
}

/// Pieces of the nested `Node { value, left, right }` rendering still to be written.
enum DebugPiece {
    Node(NodeId),
    Text(&'static str),
}

/// Renders the subtree as nested `Node { value: .., left: .., right: .. }` structs, the way a
/// derived `Debug` would, but off an explicit stack.
impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![DebugPiece::Node(self.id)];
        while let Some(piece) = pending.pop() {
            let id = match piece {
                DebugPiece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                DebugPiece::Node(id) => id,
            };

            f.write_str("Node { value: ")?;
            fmt::Debug::fmt(self.nodes.value(id), f)?;
            f.write_str(", left: ")?;

            // Pushed in reverse: left child, then ", right: ", then right child, then " }".
            pending.push(DebugPiece::Text(" }"));
            push_child(&mut pending, self.nodes.right(id));
            pending.push(DebugPiece::Text(", right: "));
            push_child(&mut pending, self.nodes.left(id));
        }
        Ok(())
    }
}

fn push_child(pending: &mut Vec<DebugPiece>, child: Option<NodeId>) {
    match child {
        Some(child) => {
            pending.push(DebugPiece::Text(")"));
            pending.push(DebugPiece::Node(child));
            pending.push(DebugPiece::Text("Some("));
        }
        None => pending.push(DebugPiece::Text("None")),
    }
}
