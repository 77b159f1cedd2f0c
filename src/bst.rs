//! An unbalanced BST. Keys are placed exactly where the descent from the root runs out of
//! nodes and nothing ever moves them afterwards, so the shape of the tree depends entirely on
//! insertion order.
//!
//! # Examples
//!
//! ```
//! use ordtree::bst::Tree;
//! use ordtree::OrderedTree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! tree.insert(1);
//! assert_eq!(tree.inorder(), [1, 1]);
//!
//! // Deleting removes one copy at a time.
//! assert!(tree.delete(&1));
//! assert_eq!(tree.inorder(), [1]);
//!
//! // Deleting something that isn't there reports it.
//! assert!(!tree.delete(&42));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::{OrderedTree, TreeNode};

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree without any balancing.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

/// A node of a [`Tree`]. It owns both of its children.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

impl<K> TreeNode<K> for Node<K> {
    fn key(&self) -> &K {
        &self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Sorted input turns this tree into a chain, so the default recursive drop of `Box<Node>`
    // could run out of stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Clone> Clone for Tree<K> {
    // Copies node by node off an explicit stack, for the same reason as `Drop`.
    fn clone(&self) -> Self {
        let mut root = None;
        let mut stack = Vec::new();
        if let Some(node) = self.root.as_deref() {
            stack.push((node, &mut root));
        }
        while let Some((source, slot)) = stack.pop() {
            let Node { left, right, .. } = &mut **slot.insert(Node::new_boxed(source.key.clone()));
            if let Some(l) = source.left.as_deref() {
                stack.push((l, left));
            }
            if let Some(r) = source.right.as_deref() {
                stack.push((r, right));
            }
        }
        Self {
            root,
            len: self.len,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord> OrderedTree<K> for Tree<K> {
    type Node = Node<K>;

    fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Walks down to the first empty child slot and puts `key` there.
    fn insert(&mut self, key: K) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::new_boxed(key));
        self.len += 1;
    }

    /// Deletes the first node on the search path holding `key`. A node with two children keeps
    /// its place in the tree: it takes over its in-order successor's key and the successor node is
    /// removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::bst::Tree;
    /// use ordtree::{OrderedTree, TreeNode};
    ///
    /// let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    /// let root: *const _ = tree.root().unwrap();
    ///
    /// assert!(tree.delete(&2));
    ///
    /// // Same node, new key.
    /// assert!(std::ptr::eq(tree.root().unwrap(), root));
    /// assert_eq!(tree.root().unwrap().key(), &3);
    /// ```
    fn delete(&mut self, key: &K) -> bool {
        let found = delete(&mut self.root, key);
        if found {
            self.len -= 1;
        } else {
            debug!("delete: key not found");
        }
        found
    }

    fn clear(&mut self) {
        // Reuse the iterative `Drop`.
        drop(std::mem::take(self));
    }
}

/// Removes the first node in the subtree at `link` that holds `key`.
fn delete<K: Ord>(link: &mut Link<K>, key: &K) -> bool {
    let Some(link) = find_link(link, key) else {
        return false;
    };
    let Some(node) = link.as_mut() else {
        return false;
    };
    match (node.left.is_some(), node.right.is_some()) {
        (true, true) => {
            node.key = take_min(&mut node.right)
                .expect("a node with two children has a right subtree");
        }
        (true, false) => {
            let left = node.left.take();
            *link = left;
        }
        (false, _) => {
            let right = node.right.take();
            *link = right;
        }
    }
    true
}

/// Walks down from `link` like a search and returns the link owning the first node that holds
/// `key`, or `None` if the walk runs off the tree.
fn find_link<'a, K: Ord>(mut link: &'a mut Link<K>, key: &K) -> Option<&'a mut Link<K>> {
    loop {
        match key.cmp(&link.as_ref()?.key) {
            Ordering::Less => link = &mut link.as_mut()?.left,
            Ordering::Greater => link = &mut link.as_mut()?.right,
            Ordering::Equal => return Some(link),
        }
    }
}

/// Unlinks the leftmost node of the subtree at `link`, splicing its right child into its place,
/// and returns its key.
fn take_min<K>(mut link: &mut Link<K>) -> Option<K> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min.key)
}
