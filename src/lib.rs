//! This crate exposes two ordered search trees sharing one contract: an unbalanced Binary Search
//! Tree ([`bst::Tree`]) and a height-balanced AVL tree ([`avl::Tree`]).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, search for, and
//! delete stored keys. BSTs are defined recursively using the notion of a `Node`. A `Node` stores
//! a key and may have a left and a right child `Node`. The invariant of a BST is:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its
//!    own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than or
//!    equal to its own key. Duplicates are kept and always descend to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). An unbalanced BST fed sorted keys degenerates
//! into a chain whose height equals its length. An AVL tree keeps the heights of every node's two
//! subtrees within one of each other by rotating after each insert and delete, which bounds the
//! height by `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use ordtree::{avl, bst, OrderedTree};
//!
//! let keys = [1, 2, 3, 4, 5, 6, 7];
//! let chain: bst::Tree<i32> = keys.iter().copied().collect();
//! let balanced: avl::Tree<i32> = keys.iter().copied().collect();
//!
//! assert_eq!(chain.inorder(), balanced.inorder());
//! assert_eq!(chain.height(), 7);
//! assert_eq!(balanced.height(), 3);
//! ```
//!
//! Keys whose type is only known at runtime (numbers or strings picked by a user) go through
//! [`DomainTree`], which rejects keys from the wrong domain instead of miscomparing them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
mod domain;
mod error;
mod util;


pub use domain::{DomainTree, Key, KeyDomain};
pub use error::{Error, Result};

use std::fmt;
use std::str::FromStr;

/// The order in which a traversal visits a node relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Left subtree, node, right subtree. Yields keys in non-decreasing order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

impl Traversal {
    /// Every traversal order, in the order a menu would list them.
    pub const ALL: [Traversal; 3] = [Self::InOrder, Self::PreOrder, Self::PostOrder];
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InOrder => "inorder",
            Self::PreOrder => "preorder",
            Self::PostOrder => "postorder",
        };
        f.write_str(name)
    }
}

impl FromStr for Traversal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inorder" | "in" => Ok(Self::InOrder),
            "preorder" | "pre" => Ok(Self::PreOrder),
            "postorder" | "post" => Ok(Self::PostOrder),
            _ => Err(Error::UnknownTraversal(s.to_owned())),
        }
    }
}

/// A read-only view of one node of a tree.
///
/// The reference handed out by [`OrderedTree::search`] doubles as the node's identity: two
/// references denote the same physical node iff [`std::ptr::eq`] says so.
pub trait TreeNode<K>: Sized {
    /// The key stored in this node.
    fn key(&self) -> &K;

    /// The left child, if any.
    fn left(&self) -> Option<&Self>;

    /// The right child, if any.
    fn right(&self) -> Option<&Self>;

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1.
    fn height(&self) -> usize {
        util::height(Some(self))
    }
}

/// The contract shared by every ordered tree in this crate.
///
/// Implementors only provide the structural operations; searching and traversing are derived
/// from [`OrderedTree::root`] and [`TreeNode`].
pub trait OrderedTree<K: Ord> {
    /// The node type handed out by [`OrderedTree::search`] and [`OrderedTree::root`].
    type Node: TreeNode<K>;

    /// The root node, or `None` for an empty tree.
    fn root(&self) -> Option<&Self::Node>;

    /// How many keys are stored, duplicates included.
    fn len(&self) -> usize;

    /// Inserts `key`. This always succeeds and always adds exactly one node, even when an equal
    /// key is already present.
    fn insert(&mut self, key: K);

    /// Deletes one node holding `key`. Returns `false`, leaving the tree untouched, when no such
    /// node exists.
    fn delete(&mut self, key: &K) -> bool;

    /// Drops every node.
    fn clear(&mut self);

    /// Returns `true` if the tree has no nodes.
    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// The height of the whole tree. An empty tree has a height of 0.
    fn height(&self) -> usize {
        self.root().map_or(0, |node| node.height())
    }

    /// Finds the node holding `key`, descending exactly as [`OrderedTree::insert`] does.
    fn search(&self, key: &K) -> Option<&Self::Node> {
        util::find(self.root(), key)
    }

    /// Returns `true` if some node holds `key`.
    fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Calls `visit` on every key in the given order.
    fn visit<F>(&self, order: Traversal, mut visit: F)
    where
        F: FnMut(&K),
    {
        util::walk(self.root(), order, &mut visit);
    }

    /// Collects every key in the given order.
    fn traverse(&self, order: Traversal) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        self.visit(order, |key| keys.push(key.clone()));
        keys
    }

    /// Collects every key in sorted order.
    fn inorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(Traversal::InOrder)
    }

    /// Collects every key, each node before its subtrees.
    fn preorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(Traversal::PreOrder)
    }

    /// Collects every key, each node after its subtrees.
    fn postorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.traverse(Traversal::PostOrder)
    }
}
