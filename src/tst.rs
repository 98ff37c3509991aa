//! The main ternary search tree implementation.
//!
//! This module contains the `Tst` type, which provides the primary API for
//! working with the ternary search tree data structure.

use std::fmt;
use std::io::{self, Write};

use crate::iter::{Iter, Keys, PrefixIter, StructureIter, Values};
use crate::node::{Link, Node};
use crate::Error;

/// A mutable ternary search tree map with string keys.
///
/// A ternary search tree (TST) is an ordered tree data structure that stores
/// key-value pairs with one key character per node. Each node branches three
/// ways: `low` and `high` lead to siblings holding smaller and greater
/// characters at the same key position, while `middle` advances to the next
/// position. Keys come out of traversal in lexicographic (code-point) order.
///
/// Insertion never overwrites: the first value stored under a key wins, and
/// later inserts of the same key report a duplicate. Removal prunes every
/// node that no longer serves a key, so the tree holds no dead branches.
#[derive(Clone)]
pub struct Tst<V> {
    /// The root node of the tree
    pub(crate) root: Link<V>,

    /// The number of values stored in the tree
    size: usize,
}

impl<V> Tst<V> {
    /// Creates a new, empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let tst = Tst::<i32>::new();
    /// assert!(tst.is_empty());
    /// ```
    pub fn new() -> Self {
        Tst {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of values stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// assert_eq!(tst.len(), 0);
    ///
    /// tst.insert("hello", 42).unwrap();
    /// assert_eq!(tst.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// assert!(tst.is_empty());
    ///
    /// tst.insert("hello", 42).unwrap();
    /// assert!(!tst.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every entry, releasing the whole tree at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// tst.insert("hello", 1).unwrap();
    /// tst.clear();
    ///
    /// assert!(tst.is_empty());
    /// assert_eq!(tst.get("hello"), None);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// A node that merely lies on the path of a longer key holds no value of
    /// its own, so looking up such a prefix reports absence. The empty key is
    /// never stored and always reports absence.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// tst.insert("hello", 42).unwrap();
    ///
    /// assert_eq!(tst.get("hello"), Some(&42));
    /// assert_eq!(tst.get("hell"), None);
    /// assert_eq!(tst.get("world"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut chars = key.chars();
        let mut ch = chars.next()?;
        let mut link = &self.root;

        while let Some(node) = link {
            if ch < node.ch {
                link = &node.low;
            } else if ch > node.ch {
                link = &node.high;
            } else if let Some(next) = chars.next() {
                ch = next;
                link = &node.middle;
            } else {
                return node.value.as_ref();
            }
        }

        None
    }

    /// Retrieves a mutable reference to the value stored for the given key,
    /// if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// tst.insert("hello", 42).unwrap();
    ///
    /// if let Some(value) = tst.get_mut("hello") {
    ///     *value += 1;
    /// }
    /// assert_eq!(tst.get("hello"), Some(&43));
    /// ```
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut chars = key.chars();
        let mut ch = chars.next()?;
        let mut link = &mut self.root;

        while let Some(node) = link {
            if ch < node.ch {
                link = &mut node.low;
            } else if ch > node.ch {
                link = &mut node.high;
            } else if let Some(next) = chars.next() {
                ch = next;
                link = &mut node.middle;
            } else {
                return node.value.as_mut();
            }
        }

        None
    }

    /// Returns `true` if the tree stores a value for the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// tst.insert("hello", 42).unwrap();
    ///
    /// assert!(tst.contains_key("hello"));
    /// assert!(!tst.contains_key("world"));
    /// ```
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair into the tree.
    ///
    /// Returns `Ok(true)` if the key was newly stored. If the key is already
    /// present the tree is left untouched, the offered value is dropped and
    /// the result is `Ok(false)`: the first value stored under a key wins.
    ///
    /// # Errors
    ///
    /// The empty key cannot be stored; inserting it returns
    /// [`Error::EmptyKey`](crate::Error) and leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    ///
    /// assert_eq!(tst.insert("hello", 1), Ok(true));
    /// assert_eq!(tst.insert("hello", 2), Ok(false));
    /// assert_eq!(tst.get("hello"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: &str, value: V) -> Result<bool, Error> {
        let units: Vec<char> = key.chars().collect();
        if units.is_empty() {
            return Err(Error::EmptyKey);
        }

        let inserted = insert_recursive(&mut self.root, &units, 0, value);
        if inserted {
            self.size += 1;
        }
        Ok(inserted)
    }

    /// Removes the value stored for the given key.
    ///
    /// Returns `Ok(true)` if the key was present. Every node that afterwards
    /// serves no remaining key is unlinked, so removing a key leaves no dead
    /// branch behind; nodes shared with other keys are untouched. Removing an
    /// absent key returns `Ok(false)` without modifying the tree, and a key
    /// of which only a longer extension is stored counts as absent.
    ///
    /// # Errors
    ///
    /// Removing the empty key returns [`Error::EmptyKey`](crate::Error).
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// tst.insert("SPACE", 10).unwrap();
    /// tst.insert("SPACES", 30).unwrap();
    ///
    /// assert_eq!(tst.remove("SPACE"), Ok(true));
    /// assert_eq!(tst.remove("SPACE"), Ok(false));
    /// assert_eq!(tst.get("SPACES"), Some(&30));
    /// ```
    pub fn remove(&mut self, key: &str) -> Result<bool, Error> {
        let units: Vec<char> = key.chars().collect();
        if units.is_empty() {
            return Err(Error::EmptyKey);
        }

        // Membership must be settled before any structural change: a blind
        // descent cannot tell an absent key from a valueless waypoint on a
        // longer key's path.
        if !self.contains_key(key) {
            return Ok(false);
        }

        if remove_recursive(&mut self.root, &units, 0) {
            self.root = None;
        }
        self.size -= 1;
        Ok(true)
    }

    /// Returns an iterator over the entries in lexicographic key order.
    ///
    /// Keys are rebuilt from the characters along each path, so the iterator
    /// yields owned `String` keys alongside value references. The traversal
    /// is lazy; nothing is visited until the iterator is advanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// tst.insert("SPACE", 10).unwrap();
    /// tst.insert("APPLE", 20).unwrap();
    ///
    /// let entries: Vec<(String, &i32)> = tst.iter().collect();
    /// assert_eq!(entries, vec![("APPLE".to_string(), &20), ("SPACE".to_string(), &10)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.root.as_deref(), String::new())
    }

    /// Returns an iterator over the keys in lexicographic order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// tst.insert("b", 2).unwrap();
    /// tst.insert("a", 1).unwrap();
    ///
    /// let keys: Vec<String> = tst.keys().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over the values in lexicographic key order.
    pub fn values(&self) -> Values<'_, V> {
        Values::new(self.iter())
    }

    /// Returns an iterator over the entries whose keys start with the given
    /// prefix, in lexicographic key order.
    ///
    /// The entry for the prefix itself is included when it is stored. The
    /// empty prefix matches the whole tree, and a prefix leading off the
    /// tree yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// tst.insert("SPACE", 10).unwrap();
    /// tst.insert("SPACES", 30).unwrap();
    /// tst.insert("APPLE", 20).unwrap();
    ///
    /// let keys: Vec<String> = tst.iter_prefix("SPACE").map(|(k, _)| k).collect();
    /// assert_eq!(keys, vec!["SPACE", "SPACES"]);
    /// ```
    pub fn iter_prefix(&self, prefix: &str) -> PrefixIter<'_, V> {
        PrefixIter::new(self.root.as_deref(), prefix)
    }

    /// Returns an iterator over every node's character in pre-order: own
    /// character first, then the low, middle and high subtrees.
    ///
    /// The dump exposes the physical shape of the tree, including valueless
    /// waypoints, which makes it a debugging aid rather than a key listing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// tst.insert("BE", 1).unwrap();
    ///
    /// assert_eq!(tst.structure().collect::<String>(), "BE");
    /// ```
    pub fn structure(&self) -> StructureIter<'_, V> {
        StructureIter::new(self.root.as_deref())
    }

    /// Writes every node's character in pre-order to the given sink,
    /// space-separated on a single line.
    pub fn write_structure<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut first = true;
        for ch in self.structure() {
            if first {
                write!(writer, "{}", ch)?;
                first = false;
            } else {
                write!(writer, " {}", ch)?;
            }
        }
        writeln!(writer)
    }
}

impl<V: fmt::Display> Tst<V> {
    /// Writes the entries to the given sink in lexicographic key order, one
    /// `KEY VALUE` line per entry.
    ///
    /// The sink is supplied by the caller; ordering and content are the
    /// contract, not the destination.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_map::Tst;
    ///
    /// let mut tst = Tst::new();
    /// tst.insert("SPACE", 10).unwrap();
    /// tst.insert("APPLE", 20).unwrap();
    ///
    /// let mut out = Vec::new();
    /// tst.write_ordered(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "APPLE 20\nSPACE 10\n");
    /// ```
    pub fn write_ordered<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (key, value) in self.iter() {
            writeln!(writer, "{} {}", key, value)?;
        }
        Ok(())
    }
}

/// Descends to the slot for `key[i..]`, creating missing nodes along the
/// way, and stores the value at the terminal node unless one is already
/// present. Returns whether the value was newly stored.
fn insert_recursive<V>(link: &mut Link<V>, key: &[char], i: usize, value: V) -> bool {
    let node = link.get_or_insert_with(|| Box::new(Node::new(key[i])));

    if key[i] < node.ch {
        insert_recursive(&mut node.low, key, i, value)
    } else if key[i] > node.ch {
        insert_recursive(&mut node.high, key, i, value)
    } else if i + 1 < key.len() {
        insert_recursive(&mut node.middle, key, i + 1, value)
    } else if node.value.is_some() {
        false
    } else {
        node.value = Some(value);
        true
    }
}

/// Clears the value at the key's terminal node and prunes bottom-up.
///
/// The return value reports whether the node in `link` is now prunable; the
/// caller owns the slot and performs the unlink. A child's report is
/// permission to unlink that child only, never to remove the current node:
/// after unlinking, the current node reports its own state, so pruning
/// cascades exactly as far as the nodes that served no other key.
///
/// The caller has already established that the key is present.
fn remove_recursive<V>(link: &mut Link<V>, key: &[char], i: usize) -> bool {
    let node = match link.as_deref_mut() {
        Some(node) => node,
        None => return false,
    };

    if key[i] < node.ch {
        if remove_recursive(&mut node.low, key, i) {
            node.low = None;
        }
    } else if key[i] > node.ch {
        if remove_recursive(&mut node.high, key, i) {
            node.high = None;
        }
    } else if i + 1 < key.len() {
        if remove_recursive(&mut node.middle, key, i + 1) {
            node.middle = None;
        }
    } else {
        // Terminal node for the key: release the value in place.
        node.value = None;
    }

    node.is_prunable()
}

impl<V> Default for Tst<V> {
    fn default() -> Self {
        Tst::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Tst<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: PartialEq> PartialEq for Tst<V> {
    /// Trees compare by content: same keys bound to equal values, whatever
    /// insertion order shaped their branches.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for Tst<V> {}
