use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::raw::{Arena, Handle};

/// A node of the unbalanced index: one key, one value, two optional children.
struct Node<K, V> {
    key: K,
    value: V,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// An unbalanced binary search tree keyed by an injected key-extraction
/// function.
///
/// The index never relies on the value type's own ordering: it is
/// constructed with a function that derives an [`Ord`] key from each value,
/// so the same structure serves name-ordered and score-ordered views of the
/// same teams.
///
/// Duplicate keys route to the right branch on insertion. Searching a
/// duplicated key therefore returns the *earliest-inserted* value; later
/// duplicates sit deeper in the right subtree. The same policy degenerates
/// the tree toward a right-leaning chain under duplicate-heavy or pre-sorted
/// input, so descent and traversal are iterative rather than recursive and
/// the worst-case linear depth stays off the call stack.
///
/// There is no rebalancing and no node deletion.
///
/// # Examples
///
/// ```
/// use standings::OrderedIndex;
///
/// let mut index = OrderedIndex::new(|team: &(&str, u32)| team.1);
/// index.insert(("Brazil", 7));
/// index.insert(("Japan", 3));
///
/// assert_eq!(index.search(&3), Some(&("Japan", 3)));
/// assert_eq!(index.search(&9), None);
///
/// let keys: Vec<u32> = index.inorder().into_iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, [3, 7]);
/// ```
pub struct OrderedIndex<K, V, F> {
    nodes: Arena<Node<K, V>>,
    root: Option<Handle>,
    key_of: F,
}

impl<K, V, F> OrderedIndex<K, V, F>
where
    K: Ord,
    F: Fn(&V) -> K,
{
    /// Makes a new, empty index ordered by the keys `key_of` extracts.
    #[must_use]
    pub const fn new(key_of: F) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            key_of,
        }
    }

    /// Returns the number of values in the index.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the index contains no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts a value at the leaf position its key selects.
    ///
    /// Keys strictly less than a node descend left; everything else,
    /// including an equal key, descends right. Always succeeds.
    ///
    /// # Complexity
    ///
    /// O(log n) on average, O(n) worst case (sorted or duplicate-heavy
    /// insertion order).
    pub fn insert(&mut self, value: V) {
        let key = (self.key_of)(&value);
        let leaf = self.nodes.alloc(Node::new(key, value));

        let Some(mut current) = self.root else {
            self.root = Some(leaf);
            return;
        };

        loop {
            let go_left = self.nodes.get(leaf).key < self.nodes.get(current).key;
            let node = self.nodes.get(current);
            match if go_left { node.left } else { node.right } {
                Some(child) => current = child,
                None => {
                    let node = self.nodes.get_mut(current);
                    if go_left {
                        node.left = Some(leaf);
                    } else {
                        node.right = Some(leaf);
                    }
                    return;
                }
            }
        }
    }

    /// Returns the value at the first node whose key equals `key`, or `None`.
    ///
    /// For duplicated keys this is the earliest-inserted value.
    pub fn search(&self, key: &K) -> Option<&V> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }
        None
    }

    /// Returns all `(key, value)` pairs in non-decreasing key order.
    ///
    /// Fully materialized; calling it repeatedly has no side effects. Uses
    /// an explicit stack so a degenerate chain cannot exhaust the call
    /// stack.
    ///
    /// # Complexity
    ///
    /// O(n) time and auxiliary space.
    #[must_use]
    pub fn inorder(&self) -> Vec<(&K, &V)> {
        let mut result = Vec::with_capacity(self.len());
        let mut stack: Vec<Handle> = Vec::new();
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.nodes.get(handle).left;
            }
            let Some(handle) = stack.pop() else { break };
            let node = self.nodes.get(handle);
            result.push((&node.key, &node.value));
            current = node.right;
        }

        result
    }
}
