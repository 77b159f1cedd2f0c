//! Errors surfaced by this crate. Missing keys and empty trees are not errors; those show up as
//! `false` or `None` from the tree operations themselves.

use thiserror::Error;

use crate::KeyDomain;

/// Everything that can go wrong when handing untyped input to a tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A key from one domain was handed to a tree bound to another.
    #[error("type mismatch: tree holds {expected} keys, got a {found} key")]
    TypeMismatch {
        /// The domain the tree was created with.
        expected: KeyDomain,
        /// The domain of the rejected key.
        found: KeyDomain,
    },

    /// Raw text could not be read as a key of the given domain.
    #[error("invalid {domain} key: {input:?}")]
    InvalidKey {
        /// The domain the text was parsed for.
        domain: KeyDomain,
        /// The text as it was given.
        input: String,
    },

    /// Raw text did not name a traversal order.
    #[error("unknown traversal order: {0:?}")]
    UnknownTraversal(String),
}

/// `Result` with this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
