//! Internal node implementation for the ternary search tree.
//!
//! This module contains the internal `Node` structure that forms the backbone
//! of the tree. Each node owns its three child slots exclusively through
//! `Box`, so unlinking a slot drops the whole subtree beneath it.

/// An optional, exclusively owned child slot.
pub(crate) type Link<V> = Option<Box<Node<V>>>;

/// Internal node type for the ternary search tree.
///
/// This type is not exposed directly in the public API but is used internally
/// by the `Tst` type. Each node holds one key character, an optional value,
/// and three child slots: `low` and `high` branch to siblings at the same
/// key position, `middle` advances the key by one position.
#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    /// The key character stored at this node
    pub ch: char,

    /// The value stored at this node, if any
    ///
    /// `None` marks a waypoint: a node that only exists on the path of
    /// longer keys. Presence is explicit, there is no sentinel value.
    pub value: Option<V>,

    /// Sibling with a smaller character at the same key position
    pub low: Link<V>,

    /// Continuation of the key at the next position
    pub middle: Link<V>,

    /// Sibling with a greater character at the same key position
    pub high: Link<V>,
}

impl<V> Node<V> {
    /// Creates a new valueless node holding the given character
    pub fn new(ch: char) -> Self {
        Node {
            ch,
            value: None,
            low: None,
            middle: None,
            high: None,
        }
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.low.is_none() && self.middle.is_none() && self.high.is_none()
    }

    /// Returns whether this node serves no remaining key
    ///
    /// A prunable node has no children and no value of its own; its parent
    /// may release it without affecting any stored entry.
    pub fn is_prunable(&self) -> bool {
        self.value.is_none() && self.is_leaf()
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_len(&self) -> usize {
        let mut count = if self.value.is_some() { 1 } else { 0 };

        for child in [&self.low, &self.middle, &self.high] {
            if let Some(child) = child {
                count += child.subtree_len();
            }
        }

        count
    }
}
