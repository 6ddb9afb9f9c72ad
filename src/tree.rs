//! The owning handle of a binary search tree.
//!
//! # Examples
//!
//! ```
//! use pluggable_bst::Tree;
//!
//! let mut tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
//! assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5]);
//!
//! // Inserting a value that's already there adds nothing.
//! assert!(tree.insert(4).is_none());
//! assert!(tree.insert(6).is_some());
//!
//! // Removing hands the value back.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert_eq!(tree.remove(&3), None);
//!
//! assert_eq!(tree.to_vec(), vec![1, 2, 4, 5, 6]);
//! assert_eq!(tree.to_string(), "1<- 2<- 4 ->5 ->6");
//! ```

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::error::{TreeError, TreeResult};
use crate::node::{NodeId, Nodes};
use crate::node_ref::NodeRef;
use crate::strategy::Strategy;
use crate::traverse::{Iter, Order};
use crate::util::RemoveResult;

/// A binary search tree of distinct values whose shape is maintained by a [`Strategy`].
///
/// The tree owns every node. [`NodeRef`]s borrow it to look around, [`NodeId`]s name nodes
/// across mutations. Removing the last value leaves the tree empty: [`Tree::root`] is `None`
/// until something is inserted again.
pub struct Tree<T> {
    nodes: Nodes<T>,
    root: Option<NodeId>,
    strategy: Strategy,
}

/// The outcome of [`Tree::remove_node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removed<T> {
    /// The value that was stored in the removed node.
    pub value: T,
    /// The node that took the removed node's place, `None` if the removed node was a leaf.
    pub replacement: Option<NodeId>,
}

impl<T> Tree<T> {
    /// Creates a tree holding only `value`, using the default [`Strategy`].
    pub fn new(value: T) -> Self {
        Self::with_strategy(value, Strategy::default())
    }

    /// Creates a tree holding only `value` that will use `strategy` from then on.
    pub fn with_strategy(value: T, strategy: Strategy) -> Self {
        let mut nodes = Nodes::new();
        let root = nodes.alloc(value, None);
        Self {
            nodes,
            root: Some(root),
            strategy,
        }
    }

    fn empty(strategy: Strategy) -> Self {
        Self {
            nodes: Nodes::new(),
            root: None,
            strategy,
        }
    }

    /// Builds a tree from `values` with the default [`Strategy`]. The first value becomes the
    /// root and the rest are inserted in the order given, so without balancing the order
    /// decides the shape. Repeated values are skipped.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptySequence`] if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pluggable_bst::{Tree, TreeError};
    ///
    /// let tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
    /// assert_eq!(*tree.root().unwrap().value(), 3);
    ///
    /// let empty: Vec<i32> = Vec::new();
    /// assert_eq!(Tree::from_values(empty).err(), Some(TreeError::EmptySequence));
    /// ```
    pub fn from_values<I>(values: I) -> TreeResult<Self>
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        Self::from_values_with_strategy(values, Strategy::default())
    }

    /// Like [`Tree::from_values`] but with the given `strategy`.
    pub fn from_values_with_strategy<I>(values: I, strategy: Strategy) -> TreeResult<Self>
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        let first = values.next().ok_or(TreeError::EmptySequence)?;

        let mut tree = Self::with_strategy(first, strategy);
        tree.extend(values);
        Ok(tree)
    }

    /// The strategy used by `insert` and `remove`.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Builds a new tree with the same values using `strategy`. The values are inserted in
    /// ascending order, so the unbalanced strategy produces a chain; a balancing strategy is
    /// expected to even that out. This tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use pluggable_bst::{Strategy, Tree};
    ///
    /// let tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
    /// let rebuilt = tree.rebalance(Strategy::RedBlack);
    ///
    /// assert_eq!(rebuilt.strategy(), Strategy::RedBlack);
    /// assert_eq!(rebuilt.to_vec(), tree.to_vec());
    /// assert_eq!(tree.strategy(), Strategy::Unbalanced);
    /// ```
    #[instrument(level = "debug", skip_all, fields(from = ?self.strategy, to = ?strategy))]
    pub fn rebalance(&self, strategy: Strategy) -> Self
    where
        T: Ord + Clone,
    {
        debug!(count = self.len(), "rebuilding tree");
        Self::from_values_with_strategy(self.to_vec(), strategy)
            .unwrap_or_else(|_| Self::empty(strategy))
    }

    /// The root node, or `None` once every value has been removed.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|root| NodeRef::new(&self.nodes, root))
    }

    /// Looks up a node by id.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownNode`] if the node has been removed or belongs to another tree.
    pub fn get(&self, id: NodeId) -> TreeResult<NodeRef<'_, T>> {
        if self.nodes.contains(id) {
            Ok(NodeRef::new(&self.nodes, id))
        } else {
            Err(TreeError::UnknownNode(id))
        }
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The number of values in the tree, counted by walking it. Always equal to
    /// [`Tree::len`].
    pub fn count(&self) -> usize {
        self.root().map_or(0, |root| root.count())
    }

    /// Inserts `value` using the tree's [`Strategy`] and returns the id of the new node. If
    /// the value is already present nothing changes and `None` is returned.
    ///
    /// Inserting into an emptied tree makes `value` the new root.
    #[instrument(level = "trace", skip_all, fields(strategy = ?self.strategy))]
    pub fn insert(&mut self, value: T) -> Option<NodeId>
    where
        T: Ord,
    {
        let Some(root) = self.root else {
            trace!("seeding empty tree");
            let root = self.nodes.alloc(value, None);
            self.root = Some(root);
            return Some(root);
        };

        let inserted = self.strategy.insert(&mut self.nodes, root, value);
        self.root = Some(self.nodes.topmost(root));
        inserted
    }

    /// Removes `value` from the tree and returns it. Removing a value that isn't there does
    /// nothing and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pluggable_bst::Tree;
    ///
    /// let mut tree = Tree::new(1);
    ///
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert!(tree.is_empty());
    /// ```
    #[instrument(level = "trace", skip_all, fields(strategy = ?self.strategy))]
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let root = self.root?;
        match self.strategy.remove(&mut self.nodes, root, value) {
            RemoveResult::NotFound => {
                trace!("value not present, nothing removed");
                None
            }
            RemoveResult::Detached {
                removed,
                replacement,
            } => Some(self.release(removed, replacement)),
        }
    }

    /// Removes the node `id`, for instance one found through [`Tree::minimum`], and reports
    /// its value along with the node that took its place.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownNode`] if the node has already been removed or belongs to another
    /// tree. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use pluggable_bst::Tree;
    ///
    /// let mut tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
    /// let smallest = tree.minimum().unwrap().id();
    ///
    /// let removed = tree.remove_node(smallest).unwrap();
    /// assert_eq!(removed.value, 1);
    /// assert_eq!(removed.replacement, None);
    /// assert!(tree.remove_node(smallest).is_err());
    ///
    /// // Ids only work on the tree that handed them out.
    /// let other = Tree::from_values([3, 2, 1]).unwrap();
    /// let foreign = other.root().unwrap().id();
    /// assert!(tree.remove_node(foreign).is_err());
    /// assert_eq!(tree.len(), 4);
    /// ```
    #[instrument(level = "trace", skip_all, fields(strategy = ?self.strategy))]
    pub fn remove_node(&mut self, id: NodeId) -> TreeResult<Removed<T>> {
        if !self.nodes.contains(id) {
            return Err(TreeError::UnknownNode(id));
        }

        let replacement = self.strategy.remove_node(&mut self.nodes, id);
        let value = self.release(id, replacement);
        Ok(Removed { value, replacement })
    }

    /// Frees a node the strategy has just unlinked, moving the root if it was the root.
    fn release(&mut self, removed: NodeId, replacement: Option<NodeId>) -> T {
        if self.root == Some(removed) {
            self.root = replacement.map(|replacement| self.nodes.topmost(replacement));
        }
        if self.root.is_none() {
            trace!("removed the last value, tree is empty");
        }

        self.nodes
            .free(removed)
            .expect("Detached node is still stored")
    }

    /// Finds the node holding `value`.
    pub fn search(&self, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: Ord,
    {
        self.root().and_then(|root| root.search(value))
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).is_some()
    }

    /// The node holding the smallest value.
    pub fn minimum(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(|root| root.minimum())
    }

    /// The node holding the largest value.
    pub fn maximum(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(|root| root.maximum())
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.root)
    }

    /// See [`NodeRef::try_traverse`].
    pub fn try_traverse<E, F>(&self, order: Order, visit: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.root()
            .map_or(Ok(()), |root| root.try_traverse(order, visit))
    }

    /// Visits the left subtree, then the root, then the right subtree.
    pub fn traverse_in_order<F: FnMut(&T)>(&self, visit: F) {
        if let Some(root) = self.root() {
            root.traverse_in_order(visit);
        }
    }

    /// Visits the root, then the left subtree, then the right subtree.
    pub fn traverse_pre_order<F: FnMut(&T)>(&self, visit: F) {
        if let Some(root) = self.root() {
            root.traverse_pre_order(visit);
        }
    }

    /// Visits the right subtree, then the root, then the left subtree. See
    /// [`Order::PostOrder`].
    pub fn traverse_post_order<F: FnMut(&T)>(&self, visit: F) {
        if let Some(root) = self.root() {
            root.traverse_post_order(visit);
        }
    }

    /// Applies `transform` to every value in ascending order and collects the results.
    ///
    /// # Examples
    ///
    /// ```
    /// use pluggable_bst::Tree;
    ///
    /// let tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
    /// assert_eq!(tree.map(|v| v + 1), vec![2, 3, 4, 5, 6]);
    /// ```
    pub fn map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(transform).collect()
    }

    /// Collects, in ascending order, the values for which `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use pluggable_bst::Tree;
    ///
    /// let tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
    /// assert_eq!(tree.filter(|v| v % 2 != 0), vec![1, 3, 5]);
    /// ```
    pub fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.root()
            .map_or_else(Vec::new, |root| root.filter(predicate))
    }

    /// See [`NodeRef::reduce`]. An empty tree yields `initial`.
    pub fn reduce<R, E, F>(&self, initial: R, combine: F) -> Result<R, E>
    where
        F: FnMut(R, &T) -> Result<R, E>,
    {
        self.iter().try_fold(initial, combine)
    }

    /// Folds the values in ascending order.
    pub fn fold<R, F>(&self, initial: R, combine: F) -> R
    where
        F: FnMut(R, &T) -> R,
    {
        self.iter().fold(initial, combine)
    }

    /// The values in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T> TryFrom<Vec<T>> for Tree<T>
where
    T: Ord,
{
    type Error = TreeError;

    fn try_from(values: Vec<T>) -> TreeResult<Self> {
        Self::from_values(values)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// The copy is a separate tree: ids taken from one are [`TreeError::UnknownNode`] in the
    /// other.
    fn clone(&self) -> Self {
        let nodes = self.nodes.clone();
        let root = self.root.map(|root| nodes.adopt(root));
        Self {
            nodes,
            root,
            strategy: self.strategy,
        }
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => fmt::Display::fmt(&root, f),
            None => Ok(()),
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("strategy", &self.strategy)
            .field("root", &self.root())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::logging::init_test_setup;

    /// Checks ordering, parent links and counts of every node, and that nothing leaked.
    fn assert_invariants<T: Ord + Clone + fmt::Debug>(tree: &Tree<T>) {
        let Some(root) = tree.root() else {
            assert_eq!(tree.len(), 0);
            return;
        };
        assert!(root.is_root());

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if let Some(left) = node.left() {
                assert!(left.value() < node.value(), "{:?} left of {:?}", left, node);
                assert_eq!(left.parent().map(|p| p.id()), Some(node.id()));
                stack.push(left);
            }
            if let Some(right) = node.right() {
                assert!(right.value() > node.value(), "{:?} right of {:?}", right, node);
                assert_eq!(right.parent().map(|p| p.id()), Some(node.id()));
                stack.push(right);
            }
            assert_eq!(
                node.count(),
                1 + node.left().map_or(0, |n| n.count()) + node.right().map_or(0, |n| n.count())
            );
        }
        assert_eq!(tree.count(), tree.len());
        let values = tree.to_vec();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sample_tree() {
        init_test_setup();
        let tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();

        assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(tree.search(&1).map(|n| *n.value()), Some(1));
        assert!(tree.search(&6).is_none());
        assert_eq!(tree.filter(|v| v % 2 != 0), vec![1, 3, 5]);
        assert_eq!(tree.fold(0, |acc, v| acc + v), 15);
        assert_invariants(&tree);
    }

    #[test]
    fn remove_root_of_sample_tree() {
        init_test_setup();
        let mut tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();

        assert_eq!(tree.remove(&3), Some(3));

        assert_eq!(tree.to_vec(), vec![1, 2, 4, 5]);
        assert!(!tree.contains(&3));
        assert_eq!(*tree.root().unwrap().value(), 4);
        assert_invariants(&tree);
    }

    #[test]
    fn always_adding_left() {
        let values = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut inserted = Vec::new();

        let mut tree = Tree::new(11);
        for value in values {
            assert!(tree.insert(value).is_some());
            inserted.push(value);
            for inserted in &inserted {
                assert!(tree.contains(inserted));
            }
        }
        assert_eq!(tree.root().unwrap().height(), 11);
        assert_invariants(&tree);
    }

    #[test]
    fn always_adding_right() {
        let mut tree = Tree::new(0);
        for value in 1..=10 {
            assert!(tree.insert(value).is_some());
        }

        assert_eq!(tree.maximum().map(|n| *n.value()), Some(10));
        assert_eq!(tree.maximum().unwrap().depth(), 10);
        assert_invariants(&tree);
    }

    #[test]
    fn insert_duplicate_changes_nothing() {
        let mut tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
        let before = tree.to_string();

        assert_eq!(tree.insert(4), None);
        assert_eq!(tree.insert(3), None);

        assert_eq!(tree.count(), 5);
        assert_eq!(tree.to_string(), before);
    }

    #[test]
    fn from_values_skips_repeats() {
        let tree = Tree::from_values([2, 2, 1, 2, 1]).unwrap();

        assert_eq!(tree.to_vec(), vec![1, 2]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(
            Tree::<i32>::try_from(Vec::new()).err(),
            Some(TreeError::EmptySequence)
        );
        assert_eq!(
            Tree::<i32>::from_values_with_strategy([], Strategy::Avl).err(),
            Some(TreeError::EmptySequence)
        );
    }

    #[test]
    fn delete_with_no_children() {
        let mut tree = Tree::from_values([5, 3, 7]).unwrap();

        assert_eq!(tree.remove(&7), Some(7));
        assert!(!tree.contains(&7));
        assert!(tree.contains(&3));
        assert!(tree.contains(&5));
        assert_invariants(&tree);
    }

    #[test]
    fn delete_with_null_left() {
        let mut tree = Tree::from_values([5, 3, 7, 9]).unwrap();

        assert_eq!(tree.remove(&7), Some(7));
        assert_eq!(tree.to_vec(), vec![3, 5, 9]);
        assert!(tree.search(&9).unwrap().is_right_child());
        assert_invariants(&tree);
    }

    #[test]
    fn delete_with_null_right() {
        let mut tree = Tree::from_values([5, 3, 7, 6]).unwrap();

        assert_eq!(tree.remove(&7), Some(7));
        assert_eq!(tree.to_vec(), vec![3, 5, 6]);
        assert!(tree.search(&6).unwrap().is_right_child());
        assert_invariants(&tree);
    }

    #[test]
    fn delete_with_two_children() {
        let mut tree = Tree::from_values([5, 3, 7, 6, 8]).unwrap();

        assert_eq!(tree.remove(&7), Some(7));
        assert_eq!(tree.to_vec(), vec![3, 5, 6, 8]);

        // The successor takes over, keeping the predecessor below it.
        let eight = tree.search(&8).unwrap();
        assert_eq!(eight.parent().map(|p| *p.value()), Some(5));
        assert_eq!(eight.left().map(|l| *l.value()), Some(6));
        assert_invariants(&tree);
    }

    #[test]
    fn delete_with_deeper_successor() {
        let mut tree = Tree::from_values([5, 3, 8, 2, 6, 9, 7]).unwrap();

        assert_eq!(tree.remove(&5), Some(5));

        assert_eq!(*tree.root().unwrap().value(), 6);
        assert_eq!(tree.to_vec(), vec![2, 3, 6, 7, 8, 9]);
        assert_eq!(tree.search(&7).unwrap().parent().map(|p| *p.value()), Some(8));
        assert_invariants(&tree);
    }

    #[test]
    fn delete_root() {
        init_test_setup();
        let mut tree = Tree::new(5);

        assert_eq!(tree.remove(&5), Some(5));

        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.count(), 0);
        assert_eq!(tree.to_vec(), Vec::<i32>::new());
        assert_eq!(tree.to_string(), "");
        assert_eq!(tree.remove(&5), None);
        assert_invariants(&tree);
    }

    #[test]
    fn insert_after_emptying_seeds_a_root() {
        let mut tree = Tree::new(5);
        tree.remove(&5);

        let root = tree.insert(8).unwrap();
        tree.insert(1);

        assert_eq!(tree.root().map(|r| r.id()), Some(root));
        assert_eq!(tree.to_vec(), vec![1, 8]);
        assert_invariants(&tree);
    }

    #[test]
    fn removing_the_minimum_node() {
        let mut tree = Tree::from_values([5, 3, 8, 2, 6, 9, 7]).unwrap();
        let minimum = tree.minimum().unwrap().id();

        let removed = tree.remove_node(minimum).unwrap();

        assert_eq!(removed.value, 2);
        assert_eq!(tree.to_vec(), vec![3, 5, 6, 7, 8, 9]);
        assert_eq!(tree.get(minimum).err(), Some(TreeError::UnknownNode(minimum)));
        assert_eq!(
            tree.remove_node(minimum).err(),
            Some(TreeError::UnknownNode(minimum))
        );
        assert_invariants(&tree);
    }

    #[test]
    fn remove_node_reports_the_replacement() {
        let mut tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
        let root = tree.root().unwrap().id();
        let four = tree.search(&4).unwrap().id();

        let removed = tree.remove_node(root).unwrap();

        assert_eq!(removed, Removed { value: 3, replacement: Some(four) });
        assert_eq!(tree.root().map(|r| r.id()), Some(four));
        assert_invariants(&tree);
    }

    #[test]
    fn ids_of_another_tree_are_unknown() {
        init_test_setup();
        let mut small = Tree::from_values([3, 2, 1]).unwrap();
        let mut large = Tree::from_values([50, 40, 60]).unwrap();
        let three = small.search(&3).unwrap().id();
        let fifty = large.root().unwrap().id();

        assert_eq!(large.get(three).err(), Some(TreeError::UnknownNode(three)));
        assert_eq!(
            large.remove_node(three).err(),
            Some(TreeError::UnknownNode(three))
        );
        assert_eq!(small.remove_node(fifty).err(), Some(TreeError::UnknownNode(fifty)));

        assert_eq!(large.to_vec(), vec![40, 50, 60]);
        assert_eq!(small.to_vec(), vec![1, 2, 3]);
        assert_eq!(small.remove_node(three).map(|r| r.value), Ok(3));
        assert_invariants(&small);
        assert_invariants(&large);
    }

    #[test]
    fn ids_of_a_clone_stay_with_the_clone() {
        let tree = Tree::from_values([5, 3, 8]).unwrap();
        let mut copy = tree.clone();
        let copy_eight = copy.search(&8).unwrap().id();

        assert!(tree.get(copy_eight).is_err());
        assert_eq!(copy.remove_node(copy_eight).map(|r| r.value), Ok(8));
        assert_eq!(tree.to_vec(), vec![3, 5, 8]);
        assert_invariants(&copy);
    }

    #[test]
    fn ids_survive_unrelated_mutations() {
        let mut tree = Tree::from_values([5, 3, 8]).unwrap();
        let eight = tree.search(&8).unwrap().id();

        tree.insert(1);
        tree.remove(&3);

        assert_eq!(*tree.get(eight).unwrap().value(), 8);
    }

    #[test]
    fn rebalance_keeps_values_and_source() {
        init_test_setup();
        let tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();

        for strategy in [Strategy::Unbalanced, Strategy::Avl, Strategy::RedBlack] {
            let rebuilt = tree.rebalance(strategy);

            assert_eq!(rebuilt.strategy(), strategy);
            assert_eq!(rebuilt.to_vec(), tree.to_vec());
            assert_invariants(&rebuilt);
        }
        assert_eq!(tree.to_string(), "1<- 2<- 3 ->4 ->5");
    }

    #[test]
    fn rebalance_empty_tree() {
        let mut tree = Tree::new(1);
        tree.remove(&1);

        let rebuilt = tree.rebalance(Strategy::Avl);

        assert!(rebuilt.is_empty());
        assert_eq!(rebuilt.strategy(), Strategy::Avl);
    }

    #[test]
    fn reduce_stops_at_the_first_error() {
        let tree = Tree::from_values([3, 2, 1, 4, 5]).unwrap();
        let mut seen = Vec::new();

        let result = tree.reduce(0, |acc, v| {
            seen.push(*v);
            if *v == 3 {
                Err(format!("refused {}", v))
            } else {
                Ok(acc + v)
            }
        });

        assert_eq!(result, Err("refused 3".to_string()));
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(tree.reduce(0, |acc, v| Ok::<_, ()>(acc + v)), Ok(15));
    }

    #[test]
    fn empty_tree_operations() {
        let mut tree = Tree::new(1);
        tree.remove(&1);

        assert!(tree.minimum().is_none());
        assert!(tree.maximum().is_none());
        assert!(!tree.contains(&1));
        assert_eq!(tree.map(|v| v * 2), Vec::<i32>::new());
        assert_eq!(tree.filter(|_| true), Vec::<i32>::new());
        assert_eq!(tree.reduce(7, |acc, v| Ok::<_, ()>(acc + v)), Ok(7));
        assert_eq!(tree.try_traverse(Order::InOrder, |_| Err("visited")), Ok(()));
        tree.traverse_post_order(|_| panic!("nothing to visit"));
    }

    #[test]
    fn clone_is_independent() {
        let mut tree = Tree::from_values([5, 3, 7, 1, 4, 6, 8]).unwrap();
        let copy = tree.clone();
        let three = tree.search(&3).unwrap().id();

        tree.remove(&3);
        tree.remove(&5);

        assert_eq!(copy.to_vec(), vec![1, 3, 4, 5, 6, 7, 8]);
        assert_eq!(copy.get(three).err(), Some(TreeError::UnknownNode(three)));
        assert_eq!(copy.search(&3).map(|n| *n.value()), Some(3));
        assert_eq!(tree.to_vec(), vec![1, 4, 6, 7, 8]);
        assert_invariants(&copy);
        assert_invariants(&tree);
    }

    #[test]
    fn debug_output() {
        let tree = Tree::from_values([2, 1]).unwrap();

        assert_eq!(
            format!("{:?}", tree),
            "Tree { strategy: Unbalanced, root: Some(Node { value: 2, left: Some(Node { \
             value: 1, left: None, right: None }), right: None }) }"
        );
    }

    #[test]
    fn iterates_by_reference() {
        let tree = Tree::from_values(["m", "c", "x", "a"]).unwrap();

        let mut collected = Vec::new();
        for value in &tree {
            collected.push(*value);
        }

        assert_eq!(collected, vec!["a", "c", "m", "x"]);
    }
}
