use pluggable_bst::{Strategy, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values in both.
fn do_ops(ops: &[Op<i8>], bst: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match *op {
            Op::Insert(v) => {
                bst.insert(v);
                set.insert(v);
            }
            Op::Remove(v) => {
                bst.remove(&v);
                set.remove(&v);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new(0);
    let mut set = BTreeSet::from([0]);

    do_ops(&ops, &mut tree, &mut set);
    tree.to_vec() == set.into_iter().collect::<Vec<_>>() && tree.count() == tree.len()
}

#[quickcheck]
fn in_order_is_sorted(first: i8, xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(std::iter::once(first).chain(xs.iter().copied())).unwrap();
    let values = tree.to_vec();

    values.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn count_matches_distinct_values(first: i8, xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(std::iter::once(first).chain(xs.iter().copied())).unwrap();
    let distinct: HashSet<_> = std::iter::once(first).chain(xs).collect();

    tree.count() == distinct.len()
}

#[quickcheck]
fn duplicate_insert_is_a_no_op(first: i8, xs: Vec<i8>, pick: usize) -> bool {
    let values: Vec<_> = std::iter::once(first).chain(xs).collect();
    let mut tree = Tree::from_values(values.iter().copied()).unwrap();
    let before = tree.to_vec();
    let duplicate = values[pick % values.len()];

    tree.insert(duplicate).is_none() && tree.to_vec() == before
}

#[quickcheck]
fn contains_until_removed(first: i8, xs: Vec<i8>) -> bool {
    let mut tree = Tree::new(first);
    for x in &xs {
        tree.insert(*x);
        if !tree.contains(x) {
            return false;
        }
    }
    for x in &xs {
        let count = tree.count();
        let was_present = tree.contains(x);
        tree.remove(x);
        let expected = if was_present { count - 1 } else { count };
        if tree.contains(x) || tree.count() != expected {
            return false;
        }
    }
    true
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let Ok(tree) = Tree::from_values(xs.iter().copied()) else {
        return true;
    };
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn removing_the_minimum_node_removes_only_the_minimum(first: i8, xs: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(std::iter::once(first).chain(xs)).unwrap();
    let mut expected = tree.to_vec();
    let smallest = expected.remove(0);

    let minimum = tree.minimum().unwrap().id();
    let removed = tree.remove_node(minimum).unwrap();

    removed.value == smallest && tree.to_vec() == expected
}

#[quickcheck]
fn rebalance_preserves_contents(xs: Vec<i8>) -> bool {
    let Ok(tree) = Tree::from_values(xs) else {
        return true;
    };

    [Strategy::Unbalanced, Strategy::Avl, Strategy::RedBlack]
        .into_iter()
        .all(|strategy| tree.rebalance(strategy).to_vec() == tree.to_vec())
}
