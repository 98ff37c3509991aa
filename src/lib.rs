//! # Ternary Map
//!
//! A ternary search tree map with string keys and ordered, prefix-aware
//! iteration.
//!
//! This crate provides a mutable ternary search tree (TST): an ordered map
//! that stores one key character per node and branches three ways, to smaller
//! and greater sibling characters at the same position and onward to the next
//! position. Keys are plain `&str` and are treated as raw ordered sequences
//! of characters in code-point order.
//!
//! ## Features
//!
//! - **Ordered map**: traversal yields keys in lexicographic order
//! - **First insert wins**: inserting a present key reports a duplicate
//!   instead of overwriting
//! - **Self-pruning removal**: removing a key unlinks every node that no
//!   longer serves a remaining key
//! - **Lazy traversal**: ordered iteration, prefix iteration and a pre-order
//!   structural dump, all as iterators driven by explicit stacks
//!
//! ## Example
//!
//! ```rust
//! use ternary_map::Tst;
//!
//! // Create a new tree
//! let mut tst = Tst::new();
//!
//! // Insert some values
//! tst.insert("hello", 1).unwrap();
//! tst.insert("world", 2).unwrap();
//!
//! // Lookup values
//! assert_eq!(tst.get("hello"), Some(&1));
//!
//! // Iterate in key order
//! let keys: Vec<String> = tst.keys().collect();
//! assert_eq!(keys, vec!["hello", "world"]);
//! ```

mod iter;
mod node;
mod tst;

// Re-export public types
pub use crate::iter::{Iter, Keys, PrefixIter, StructureIter, Values};
pub use crate::tst::Tst;

/// Errors that can occur in tree operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The empty key was passed to an operation that stores or removes
    EmptyKey,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyKey => write!(f, "keys must contain at least one character"),
        }
    }
}

impl std::error::Error for Error {}

/// Creates a [`Tst`] from a list of `key => value` pairs.
///
/// # Panics
///
/// Panics if a literal key is empty or appears twice; both are mistakes in
/// the literal, not runtime conditions.
///
/// # Examples
///
/// ```
/// use ternary_map::tst;
///
/// let tst = tst!["SPACE" => 10, "APPLE" => 20];
///
/// assert_eq!(tst.get("APPLE"), Some(&20));
/// assert_eq!(tst.len(), 2);
/// ```
#[macro_export]
macro_rules! tst {
    () => {
        $crate::Tst::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut tst = $crate::Tst::new();
        $(
            match tst.insert($key, $value) {
                Ok(true) => {}
                Ok(false) => panic!("duplicate key in tst! literal"),
                Err(err) => panic!("invalid key in tst! literal: {}", err),
            }
        )+
        tst
    }};
}
