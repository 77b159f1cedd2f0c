//! The same properties, run against both engines.

use ordtree::{avl, bst, OrderedTree, TreeNode};
use quickcheck_macros::quickcheck;

use crate::common::balanced_height;
use crate::{do_ops, Op};

macro_rules! ordered_tree_properties {
    ($name:ident, $engine:ident) => {
        mod $name {
            use super::*;

            type Tree<K> = ordtree::$engine::Tree<K>;

            #[quickcheck]
            fn inorder_is_non_decreasing(ops: Vec<Op<i8>>) -> bool {
                let mut tree = Tree::new();
                do_ops(&ops, &mut tree, |tree| {
                    tree.inorder().windows(2).all(|w| w[0] <= w[1])
                })
            }

            #[quickcheck]
            fn insert_then_search(xs: Vec<i8>, x: i8) -> bool {
                let mut tree: Tree<i8> = xs.into_iter().collect();
                tree.insert(x);
                let found = tree.search(&x).map(|n| *n.key());
                tree.delete(&x);
                found == Some(x) && (tree.contains(&x) == tree.inorder().contains(&x))
            }

            #[quickcheck]
            fn delete_then_search(xs: Vec<i8>, x: i8) -> bool {
                let mut tree: Tree<i8> = xs.into_iter().filter(|&k| k != x).collect();
                tree.insert(x);
                tree.delete(&x) && !tree.contains(&x)
            }

            #[quickcheck]
            fn delete_missing_is_a_no_op(xs: Vec<i8>, x: i8) -> bool {
                let mut tree: Tree<i8> = xs.into_iter().filter(|&k| k != x).collect();
                let inorder = tree.inorder();
                let preorder = tree.preorder();
                let postorder = tree.postorder();

                !tree.delete(&x)
                    && tree.inorder() == inorder
                    && tree.preorder() == preorder
                    && tree.postorder() == postorder
            }

            #[quickcheck]
            fn every_insert_adds_one_node(xs: Vec<i8>) -> bool {
                let mut tree = Tree::new();
                xs.iter().enumerate().all(|(i, &x)| {
                    tree.insert(x);
                    tree.len() == i + 1 && tree.inorder().len() == i + 1
                })
            }

            #[quickcheck]
            fn traversals_hold_the_same_keys(xs: Vec<i8>) -> bool {
                let tree: Tree<i8> = xs.iter().copied().collect();
                let mut sorted = xs;
                sorted.sort();

                let mut preorder = tree.preorder();
                let mut postorder = tree.postorder();
                preorder.sort();
                postorder.sort();
                tree.inorder() == sorted && preorder == sorted && postorder == sorted
            }
        }
    };
}

ordered_tree_properties!(unbalanced, bst);
ordered_tree_properties!(balanced, avl);

#[quickcheck]
fn avl_balanced_after_every_op(ops: Vec<Op<i8>>) -> bool {
    let mut tree = avl::Tree::new();
    do_ops(&ops, &mut tree, |tree| {
        balanced_height(tree.root()) == Some(tree.height())
    })
}

#[quickcheck]
fn avl_never_taller_than_bst(xs: Vec<u8>) -> bool {
    let plain: bst::Tree<u8> = xs.iter().copied().collect();
    let balanced: avl::Tree<u8> = xs.iter().copied().collect();
    balanced.height() <= plain.height()
}
