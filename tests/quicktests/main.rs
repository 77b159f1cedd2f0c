use ordtree::{avl, bst, OrderedTree, Traversal};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

#[path = "../common/mod.rs"]
mod common;

mod engines;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Delete one copy of the K from the data structure
    Delete(K),
}

impl<K: Arbitrary> Arbitrary for Op<K> {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Delete(K::arbitrary(g))
        }
    }
}

/// Applies a set of operations to a tree, calling `check` after each one.
pub fn do_ops<K, T>(ops: &[Op<K>], tree: &mut T, mut check: impl FnMut(&T) -> bool) -> bool
where
    K: Ord + Clone,
    T: OrderedTree<K>,
{
    ops.iter().all(|op| {
        match op {
            Op::Insert(k) => tree.insert(k.clone()),
            Op::Delete(k) => {
                tree.delete(k);
            }
        }
        check(tree)
    })
}

#[quickcheck]
fn both_engines_agree(ops: Vec<Op<i8>>) -> bool {
    common::init_tracing();
    let mut plain = bst::Tree::new();
    let mut balanced = avl::Tree::new();
    do_ops(&ops, &mut plain, |_| true);
    do_ops(&ops, &mut balanced, |_| true);

    plain.len() == balanced.len() && plain.inorder() == balanced.inorder()
}

#[quickcheck]
fn distinct_keys_delete_back_to_empty(xs: BTreeSet<i16>) -> bool {
    let keys: Vec<i16> = xs.into_iter().collect();
    let mut tree: avl::Tree<i16> = keys.iter().rev().copied().collect();
    for key in &keys {
        if !tree.delete(key) {
            return false;
        }
    }
    tree.is_empty() && Traversal::ALL.iter().all(|&order| tree.traverse(order).is_empty())
}
