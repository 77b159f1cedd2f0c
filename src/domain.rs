//! Keys whose type is only picked at runtime. A [`DomainTree`] is bound to one [`KeyDomain`]
//! when it is created and turns away keys from the other one.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::{Error, OrderedTree, Result, Traversal};

/// Which kind of keys a tree holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyDomain {
    /// Integers and floats, compared by value.
    Numeric,
    /// Strings, compared lexicographically.
    Lexicographic,
}

impl fmt::Display for KeyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Numeric => "numeric",
            Self::Lexicographic => "lexicographic",
        })
    }
}

impl KeyDomain {
    /// Reads `raw` as a key of this domain. Numbers may be written as integers or floats and
    /// may be surrounded by whitespace; strings are taken verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Key, KeyDomain};
    ///
    /// assert_eq!(KeyDomain::Numeric.parse(" 42 "), Ok(Key::Number(42.0)));
    /// assert_eq!(KeyDomain::Numeric.parse("2.5"), Ok(Key::Number(2.5)));
    /// assert!(KeyDomain::Numeric.parse("forty-two").is_err());
    /// assert_eq!(KeyDomain::Lexicographic.parse(" 42 "), Ok(Key::from(" 42 ")));
    /// ```
    pub fn parse(self, raw: &str) -> Result<Key> {
        match self {
            Self::Numeric => raw
                .trim()
                .parse::<f64>()
                .map(Key::Number)
                .map_err(|_| Error::InvalidKey {
                    domain: self,
                    input: raw.to_owned(),
                }),
            Self::Lexicographic => Ok(Key::Text(raw.to_owned())),
        }
    }
}

/// A key from either domain.
///
/// Keys are totally ordered. Numbers compare by value, with `-0.0 == 0.0` and NaNs sorted to the
/// ends; strings compare lexicographically. The order between a number and a string is
/// arbitrary but fixed, and a [`DomainTree`] never relies on it.
#[derive(Clone, Debug)]
pub enum Key {
    /// A key in the numeric domain.
    Number(f64),
    /// A key in the lexicographic domain.
    Text(String),
}

impl Key {
    /// The domain this key belongs to.
    pub fn domain(&self) -> KeyDomain {
        match self {
            Self::Number(_) => KeyDomain::Numeric,
            Self::Text(_) => KeyDomain::Lexicographic,
        }
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) if a == b => Ordering::Equal,
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Key {}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for Key {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// An [`OrderedTree`] of [`Key`]s bound to one [`KeyDomain`] for its whole life.
///
/// # Examples
///
/// ```
/// use ordtree::{avl, DomainTree, Error, Key, KeyDomain, Traversal};
///
/// let mut tree = DomainTree::<avl::Tree<Key>>::new(KeyDomain::Numeric);
/// tree.insert(Key::from(3)).unwrap();
/// tree.insert(KeyDomain::Numeric.parse("1.5").unwrap()).unwrap();
///
/// assert_eq!(
///     tree.insert(Key::from("three")),
///     Err(Error::TypeMismatch {
///         expected: KeyDomain::Numeric,
///         found: KeyDomain::Lexicographic,
///     })
/// );
/// assert_eq!(
///     tree.traverse(Traversal::InOrder),
///     [Key::Number(1.5), Key::Number(3.0)]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct DomainTree<T> {
    domain: KeyDomain,
    tree: T,
}

impl<T> DomainTree<T>
where
    T: OrderedTree<Key> + Default,
{
    /// Generates a new, empty tree that only accepts keys from `domain`.
    pub fn new(domain: KeyDomain) -> Self {
        Self {
            domain,
            tree: T::default(),
        }
    }
}

impl<T> DomainTree<T>
where
    T: OrderedTree<Key>,
{
    /// The domain this tree was created with.
    pub fn domain(&self) -> KeyDomain {
        self.domain
    }

    /// The underlying tree.
    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// Reads `raw` as a key of this tree's domain. See [`KeyDomain::parse`].
    pub fn parse(&self, raw: &str) -> Result<Key> {
        self.domain.parse(raw)
    }

    /// Inserts `key`. See [`OrderedTree::insert`].
    pub fn insert(&mut self, key: Key) -> Result<()> {
        self.check(&key)?;
        self.tree.insert(key);
        Ok(())
    }

    /// Deletes one node holding `key`, reporting whether there was one. See
    /// [`OrderedTree::delete`].
    pub fn delete(&mut self, key: &Key) -> Result<bool> {
        self.check(key)?;
        Ok(self.tree.delete(key))
    }

    /// Finds the node holding `key`. See [`OrderedTree::search`].
    pub fn search(&self, key: &Key) -> Result<Option<&T::Node>> {
        self.check(key)?;
        Ok(self.tree.search(key))
    }

    /// Returns `true` if some node holds `key`.
    pub fn contains(&self, key: &Key) -> Result<bool> {
        self.search(key).map(|node| node.is_some())
    }

    /// Collects every key in the given order.
    pub fn traverse(&self, order: Traversal) -> Vec<Key> {
        self.tree.traverse(order)
    }

    /// How many keys are stored, duplicates included.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Drops every node. The domain stays the same.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    fn check(&self, key: &Key) -> Result<()> {
        let found = key.domain();
        if found == self.domain {
            Ok(())
        } else {
            debug!(expected = %self.domain, %found, "rejecting key from the wrong domain");
            Err(Error::TypeMismatch {
                expected: self.domain,
                found,
            })
        }
    }
}
