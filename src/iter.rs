//! Iteration over the ternary search tree.
//!
//! All traversals here drive an explicit stack instead of recursing, so
//! iteration depth never depends on the call stack. The in-order walk keeps
//! a single prefix buffer in step with the stack: entering a node's middle
//! subtree pushes its character, leaving it pops the character again, and
//! every emitted key is the buffer plus the node's own character.

use crate::node::Node;
use crate::tst::Tst;

/// What to do with a stacked node when it reaches the top.
enum Action {
    GoLow,
    Visit,
    GoMiddle,
    GoHigh,
}

/// An iterator over the entries of a `Tst` in lexicographic key order.
///
/// Created by [`Tst::iter`]. Yields owned `String` keys rebuilt from the
/// characters along each path, paired with references to the values.
pub struct Iter<'a, V> {
    stack: Vec<(&'a Node<V>, Action)>,
    prefix: String,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(start: Option<&'a Node<V>>, prefix: String) -> Self {
        let mut stack = Vec::new();
        if let Some(node) = start {
            stack.push((node, Action::GoLow));
        }
        Iter { stack, prefix }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, action)) = self.stack.pop() {
            match action {
                Action::GoLow => {
                    self.stack.push((node, Action::Visit));
                    if let Some(low) = node.low.as_deref() {
                        self.stack.push((low, Action::GoLow));
                    }
                }
                Action::Visit => {
                    self.stack.push((node, Action::GoMiddle));
                    if let Some(value) = &node.value {
                        let mut key = self.prefix.clone();
                        key.push(node.ch);
                        return Some((key, value));
                    }
                }
                Action::GoMiddle => {
                    self.prefix.push(node.ch);
                    self.stack.push((node, Action::GoHigh));
                    if let Some(middle) = node.middle.as_deref() {
                        self.stack.push((middle, Action::GoLow));
                    }
                }
                Action::GoHigh => {
                    self.prefix.pop();
                    if let Some(high) = node.high.as_deref() {
                        self.stack.push((high, Action::GoLow));
                    }
                }
            }
        }

        None
    }
}

/// An iterator over the keys of a `Tst` in lexicographic order.
///
/// Created by [`Tst::keys`].
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Keys { inner }
    }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// An iterator over the values of a `Tst` in lexicographic key order.
///
/// Created by [`Tst::values`].
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Values { inner }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

/// An iterator over the entries whose keys start with a given prefix.
///
/// Created by [`Tst::iter_prefix`]. The prefix's own entry comes first when
/// stored; every key strictly extending the prefix lives in the terminal
/// node's middle subtree, which is walked in order with the prefix as the
/// initial key buffer.
pub struct PrefixIter<'a, V> {
    exact: Option<(String, &'a V)>,
    rest: Iter<'a, V>,
}

impl<'a, V> PrefixIter<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>, prefix: &str) -> Self {
        let mut chars = prefix.chars();
        let mut ch = match chars.next() {
            Some(ch) => ch,
            // The empty prefix matches the whole tree.
            None => {
                return PrefixIter {
                    exact: None,
                    rest: Iter::new(root, String::new()),
                }
            }
        };

        // Walk the prefix like a lookup.
        let mut node = root;
        while let Some(n) = node {
            if ch < n.ch {
                node = n.low.as_deref();
            } else if ch > n.ch {
                node = n.high.as_deref();
            } else if let Some(next) = chars.next() {
                ch = next;
                node = n.middle.as_deref();
            } else {
                return PrefixIter {
                    exact: n.value.as_ref().map(|value| (prefix.to_string(), value)),
                    rest: Iter::new(n.middle.as_deref(), prefix.to_string()),
                };
            }
        }

        // The prefix leads off the tree; nothing starts with it.
        PrefixIter {
            exact: None,
            rest: Iter::new(None, String::new()),
        }
    }
}

impl<'a, V> Iterator for PrefixIter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self.exact.take() {
            Some(entry) => Some(entry),
            None => self.rest.next(),
        }
    }
}

/// An iterator over every node's character in pre-order.
///
/// Created by [`Tst::structure`]. Visits each node before its subtrees,
/// low first, then middle, then high.
pub struct StructureIter<'a, V> {
    stack: Vec<&'a Node<V>>,
}

impl<'a, V> StructureIter<'a, V> {
    pub(crate) fn new(start: Option<&'a Node<V>>) -> Self {
        StructureIter {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, V> Iterator for StructureIter<'a, V> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Pushed in reverse so low comes out before middle before high.
        if let Some(high) = node.high.as_deref() {
            self.stack.push(high);
        }
        if let Some(middle) = node.middle.as_deref() {
            self.stack.push(middle);
        }
        if let Some(low) = node.low.as_deref() {
            self.stack.push(low);
        }

        Some(node.ch)
    }
}

impl<'a, V> IntoIterator for &'a Tst<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::Tst;

    fn sample() -> Tst<i32> {
        let mut tst = Tst::new();
        for (key, value) in [
            ("SPACE", 10),
            ("APPLE", 20),
            ("TIGER", 70),
            ("SPACES", 30),
            ("APPS", 80),
        ] {
            tst.insert(key, value).unwrap();
        }
        tst
    }

    #[test]
    fn test_iter_empty_tree() {
        let tst: Tst<i32> = Tst::new();
        assert_eq!(tst.iter().next(), None);
    }

    #[test]
    fn test_iter_lexicographic_order() {
        let entries: Vec<(String, i32)> = sample().iter().map(|(k, v)| (k, *v)).collect();

        assert_eq!(
            entries,
            vec![
                ("APPLE".to_string(), 20),
                ("APPS".to_string(), 80),
                ("SPACE".to_string(), 10),
                ("SPACES".to_string(), 30),
                ("TIGER".to_string(), 70),
            ]
        );
    }

    #[test]
    fn test_iter_skips_waypoints() {
        let mut tst = Tst::new();
        tst.insert("abc", 1).unwrap();

        // "a" and "ab" exist as nodes but hold no values.
        let keys: Vec<String> = tst.keys().collect();
        assert_eq!(keys, vec!["abc"]);
    }

    #[test]
    fn test_keys_and_values() {
        let tst = sample();

        let keys: Vec<String> = tst.keys().collect();
        assert_eq!(keys, vec!["APPLE", "APPS", "SPACE", "SPACES", "TIGER"]);

        let values: Vec<i32> = tst.values().copied().collect();
        assert_eq!(values, vec![20, 80, 10, 30, 70]);
    }

    #[test]
    fn test_prefix_iter_includes_exact_entry() {
        let tst = sample();

        let keys: Vec<String> = tst.iter_prefix("SPACE").map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["SPACE", "SPACES"]);
    }

    #[test]
    fn test_prefix_iter_excludes_siblings() {
        let tst = sample();

        let keys: Vec<String> = tst.iter_prefix("AP").map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["APPLE", "APPS"]);
    }

    #[test]
    fn test_prefix_iter_waypoint_prefix() {
        let mut tst = Tst::new();
        tst.insert("SPACES", 30).unwrap();

        // The prefix itself is a waypoint with no value; its extensions
        // must still come out.
        let keys: Vec<String> = tst.iter_prefix("SPACE").map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["SPACES"]);
    }

    #[test]
    fn test_prefix_iter_empty_prefix() {
        let tst = sample();

        let all: Vec<String> = tst.iter_prefix("").map(|(k, _)| k).collect();
        let keys: Vec<String> = tst.keys().collect();
        assert_eq!(all, keys);
    }

    #[test]
    fn test_prefix_iter_off_tree() {
        let tst = sample();

        assert_eq!(tst.iter_prefix("SPARK").count(), 0);
        assert_eq!(tst.iter_prefix("ZEBRA").count(), 0);
    }

    #[test]
    fn test_structure_preorder() {
        let mut tst = Tst::new();
        tst.insert("B", 2).unwrap();
        tst.insert("A", 1).unwrap();
        tst.insert("C", 3).unwrap();

        // Root first, then the low sibling, then the high sibling.
        assert_eq!(tst.structure().collect::<String>(), "BAC");
    }

    #[test]
    fn test_structure_includes_waypoints() {
        let mut tst = Tst::new();
        tst.insert("abc", 1).unwrap();

        assert_eq!(tst.structure().collect::<String>(), "abc");
        assert_eq!(tst.len(), 1);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let tst = sample();

        let mut count = 0;
        for (key, value) in &tst {
            assert_eq!(tst.get(&key), Some(value));
            count += 1;
        }
        assert_eq!(count, tst.len());
    }
}
