//! Node helpers shared by both engines. Everything here only reads the tree through
//! [`TreeNode`], so it works the same on plain and height-augmented nodes.

use std::cmp::Ordering;

use crate::{Traversal, TreeNode};

/// Descends from `node` the way an insert would: left while `key` is smaller, right otherwise,
/// stopping at the first node whose key equals `key`.
pub(crate) fn find<'a, K, N>(mut node: Option<&'a N>, key: &K) -> Option<&'a N>
where
    K: Ord,
    N: TreeNode<K>,
{
    while let Some(n) = node {
        node = match key.cmp(n.key()) {
            Ordering::Less => n.left(),
            Ordering::Equal => return Some(n),
            Ordering::Greater => n.right(),
        };
    }
    None
}

/// Visits every key under `node` in the given order.
pub(crate) fn walk<K, N, F>(node: Option<&N>, order: Traversal, visit: &mut F)
where
    N: TreeNode<K>,
    F: FnMut(&K),
{
    let Some(n) = node else {
        return;
    };
    match order {
        Traversal::InOrder => {
            walk(n.left(), order, visit);
            visit(n.key());
            walk(n.right(), order, visit);
        }
        Traversal::PreOrder => {
            visit(n.key());
            walk(n.left(), order, visit);
            walk(n.right(), order, visit);
        }
        Traversal::PostOrder => {
            walk(n.left(), order, visit);
            walk(n.right(), order, visit);
            visit(n.key());
        }
    }
}

/// Counts the levels under `node` by walking every path. Nodes that store their height should
/// answer from that instead.
pub(crate) fn height<K, N>(node: Option<&N>) -> usize
where
    N: TreeNode<K>,
{
    // Breadth first so a degenerate chain doesn't cost one stack frame per node.
    let mut level: Vec<&N> = node.into_iter().collect();
    let mut height = 0;
    while !level.is_empty() {
        height += 1;
        level = level
            .into_iter()
            .flat_map(|n| n.left().into_iter().chain(n.right()))
            .collect();
    }
    height
}
