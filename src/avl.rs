//! A self-balancing BST (specifically, an AVL tree). Every node stores the height of its
//! subtree, and after each insert or delete the nodes on the path back up to the root are
//! re-measured and rotated until their two subtrees differ in height by at most one.
//!
//! # Examples
//!
//! ```
//! use ordtree::avl::Tree;
//! use ordtree::{OrderedTree, TreeNode};
//!
//! let mut tree = Tree::new();
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//!
//! // Sorted input still gives a perfectly balanced tree.
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root().map(|n| *n.key()), Some(4));
//!
//! assert!(tree.delete(&4));
//! assert_eq!(tree.inorder(), [1, 2, 3, 5, 6, 7]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::{OrderedTree, TreeNode};

type Link<K> = Option<Box<Node<K>>>;

/// A height-balanced Binary Search Tree.
#[derive(Clone)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

/// A node of a [`Tree`]. Besides its key and children it caches the height of its subtree.
#[derive(Clone)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

/// Which child a key descended into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// The four ways to fix a node whose subtrees differ in height by two. See [the Wikipedia
/// page][wiki] for the terminology.
///
/// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Rotation {
    /// The left child's left subtree is too tall: rotate right.
    LeftLeft,
    /// The left child's right subtree is too tall: rotate the child left, then the node right.
    LeftRight,
    /// The right child's right subtree is too tall: rotate left.
    RightRight,
    /// The right child's left subtree is too tall: rotate the child right, then the node left.
    RightLeft,
}

fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The height of the left subtree minus the height of the right subtree. Positive means
    /// left-heavy.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Rotate `self` to the left. This moves the right child up vertically and `self` down
    /// vertically. Used to rebalance the tree when the right child is too tall. As such, it must
    /// only be called when there _is_ a right child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    z (i.e. "self")                 y
    ///   / \                             / \
    ///  a   y          rotate ->        z   c
    ///     / \                         / \
    ///    b   c                       a   b
    /// ```
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut y = self.right.take().expect("Rotate left => right child");
        self.right = y.left.take();
        // `self` ends up below `y`, so it has to be re-measured first.
        self.fix_height();
        y.left = Some(self);
        y.fix_height();
        y
    }

    /// Rotate `self` to the right. The mirror image of [`Node::rotate_left`].
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///        z (i.e. "self")          y
    ///       / \                      / \
    ///      y   c     rotate ->      a   z
    ///     / \                          / \
    ///    a   b                        b   c
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut y = self.left.take().expect("Rotate right => left child");
        self.left = y.right.take();
        self.fix_height();
        y.right = Some(self);
        y.fix_height();
        y
    }

    fn rotate(mut self: Box<Self>, rotation: Rotation) -> Box<Self> {
        trace!(?rotation, "rebalancing");
        match rotation {
            Rotation::LeftLeft => self.rotate_right(),
            Rotation::RightRight => self.rotate_left(),
            Rotation::LeftRight => {
                self.left = self.left.take().map(Node::rotate_left);
                self.rotate_right()
            }
            Rotation::RightLeft => {
                self.right = self.right.take().map(Node::rotate_right);
                self.rotate_left()
            }
        }
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

    fn height(&self) -> usize {
        self.height
    }
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
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

    /// Inserts `key` below the last node on its search path, then rebalances every ancestor on
    /// the way back up.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::avl::Tree;
    /// use ordtree::{OrderedTree, TreeNode};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// // A left-right rotation lifted the last key to the root.
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(2));
    /// assert_eq!(tree.preorder(), [2, 1, 3]);
    /// ```
    fn insert(&mut self, key: K) {
        insert(&mut self.root, key);
        self.len += 1;
    }

    /// Deletes the first node on the search path holding `key`, then rebalances every ancestor
    /// on the way back up. A node with two children keeps its place in the tree: it takes over
    /// its in-order successor's key and the successor node is removed instead.
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
        self.root = None;
        self.len = 0;
    }
}

/// Inserts `key` into the subtree at `link` and returns which child of that subtree's root the
/// key went into, or `None` if it became the root of the subtree itself.
fn insert<K: Ord>(link: &mut Link<K>, key: K) -> Option<Side> {
    let Some(node) = link.as_mut() else {
        *link = Some(Node::new_boxed(key));
        return None;
    };

    // `below` is the side taken at the child, which is exactly the outcome of comparing the
    // inserted key with the child's key. Equal keys count as greater because they went right.
    let (side, below) = if key < node.key {
        (Side::Left, insert(&mut node.left, key))
    } else {
        (Side::Right, insert(&mut node.right, key))
    };
    node.fix_height();

    let balance = node.balance_factor();
    let rotation = if balance > 1 {
        match below {
            Some(Side::Right) => Rotation::LeftRight,
            _ => Rotation::LeftLeft,
        }
    } else if balance < -1 {
        match below {
            Some(Side::Left) => Rotation::RightLeft,
            _ => Rotation::RightRight,
        }
    } else {
        return Some(side);
    };
    rotate(link, rotation);
    Some(side)
}

/// Removes the first node in the subtree at `link` that holds `key`.
fn delete<K: Ord>(link: &mut Link<K>, key: &K) -> bool {
    let Some(node) = link.as_mut() else {
        return false;
    };
    let found = match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key),
        Ordering::Greater => delete(&mut node.right, key),
        Ordering::Equal => match (node.left.is_some(), node.right.is_some()) {
            (true, true) => {
                node.key = take_min(&mut node.right)
                    .expect("a node with two children has a right subtree");
                true
            }
            // At most one child: whatever remains is balanced and at most one level tall, so it
            // takes this node's place as is.
            (true, false) => {
                let left = node.left.take();
                *link = left;
                return true;
            }
            (false, _) => {
                let right = node.right.take();
                *link = right;
                return true;
            }
        },
    };
    if found {
        rebalance(link);
    }
    found
}

/// Unlinks the leftmost node of the subtree at `link`, splicing its right child into its place
/// and rebalancing the path above it, and returns its key.
fn take_min<K>(link: &mut Link<K>) -> Option<K> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        let key = take_min(&mut node.left);
        rebalance(link);
        key
    } else {
        let mut min = link.take()?;
        *link = min.right.take();
        Some(min.key)
    }
}

/// Re-measures the root of the subtree at `link` after one of its subtrees shrank, and rotates
/// it if it is now out of balance. With nothing to compare a key against, the rotation is picked
/// from the taller child's own balance; a perfectly balanced child gets the single rotation.
fn rebalance<K>(link: &mut Link<K>) {
    let Some(node) = link.as_mut() else {
        return;
    };
    node.fix_height();

    let balance = node.balance_factor();
    let child_balance = |child: &Link<K>| child.as_ref().map_or(0, |n| n.balance_factor());
    let rotation = if balance > 1 {
        if child_balance(&node.left) >= 0 {
            Rotation::LeftLeft
        } else {
            Rotation::LeftRight
        }
    } else if balance < -1 {
        if child_balance(&node.right) <= 0 {
            Rotation::RightRight
        } else {
            Rotation::RightLeft
        }
    } else {
        return;
    };
    rotate(link, rotation);
}

fn rotate<K>(link: &mut Link<K>, rotation: Rotation) {
    *link = link.take().map(|node| node.rotate(rotation));

    if cfg!(debug_assertions) {
        let Some(root) = link.as_deref() else {
            return;
        };
        let left_height = height(&root.left);
        let right_height = height(&root.right);
        assert_eq!(root.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
    }
}
