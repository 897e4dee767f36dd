use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::raw::{Arena, Handle};

/// A node of the balanced index. `height` is `1 + max(children)`, absent
/// child = 0, recomputed immediately after every structural change so it is
/// never read stale.
struct Node<K, V> {
    key: K,
    value: V,
    left: Option<Handle>,
    right: Option<Handle>,
    height: usize,
}

impl<K, V> Node<K, V> {
    const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        }
    }
}

/// An AVL tree keyed by an injected key-extraction function.
///
/// Shares the insertion contract of [`OrderedIndex`](crate::OrderedIndex):
/// duplicate keys route right. On top of that it guarantees the tree height
/// stays O(log n): after every insertion, every node's balance factor (left
/// height minus right height) is -1, 0, or 1. A temporary ±2 on the way
/// back up from an insertion triggers exactly one rotation event (single or
/// double) at the lowest unbalanced ancestor.
///
/// Unlike the unbalanced index, searching a duplicated key returns
/// whichever equal node the descent meets first *after* rebalancing, not
/// necessarily the earliest-inserted one: a rotation can promote a later
/// duplicate above the first.
///
/// Rotation case selection compares the inserted key against the heavy
/// child's key, with ties on the `>=` side: insertion routes equal keys
/// right, so an equal key inserted below a child always lies along that
/// child's right spine.
///
/// Insertion is recursive; the height bound makes the recursion depth
/// logarithmic by construction, unlike the unbalanced variant.
///
/// # Examples
///
/// ```
/// use standings::{BalancedIndex, Team};
///
/// let mut index = BalancedIndex::new(|team: &Team| team.score);
/// for (name, score) in [("A", 3), ("B", 5), ("C", 3)] {
///     index.insert(Team::new(name, score));
/// }
///
/// let names: Vec<&str> = index.inorder().into_iter().map(|(_, t)| t.name.as_str()).collect();
/// assert_eq!(names, ["A", "C", "B"]);
/// assert_eq!(index.height(), 2);
/// ```
pub struct BalancedIndex<K, V, F> {
    nodes: Arena<Node<K, V>>,
    root: Option<Handle>,
    key_of: F,
}

impl<K, V, F> BalancedIndex<K, V, F>
where
    K: Ord + Clone,
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

    /// Returns the height of the tree, 0 when empty.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// Inserts a value, rebalancing on the way back up.
    ///
    /// # Complexity
    ///
    /// O(log n), with at most one rotation event per insertion.
    pub fn insert(&mut self, value: V) {
        let key = (self.key_of)(&value);
        let root = self.root;
        self.root = Some(self.insert_at(root, key, value));
    }

    /// Returns the value at the first node whose key equals `key`, or `None`.
    ///
    /// For duplicated keys this is whichever duplicate rebalancing left
    /// highest in the tree, not necessarily the earliest-inserted one.
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
    #[must_use]
    pub fn inorder(&self) -> Vec<(&K, &V)> {
        let mut result = Vec::with_capacity(self.len());
        self.walk(self.root, &mut result);
        result
    }

    fn walk<'a>(&'a self, node: Option<Handle>, result: &mut Vec<(&'a K, &'a V)>) {
        if let Some(handle) = node {
            let node = self.nodes.get(handle);
            self.walk(node.left, result);
            result.push((&node.key, &node.value));
            self.walk(node.right, result);
        }
    }

    fn insert_at(&mut self, node: Option<Handle>, key: K, value: V) -> Handle {
        let Some(handle) = node else {
            return self.nodes.alloc(Node::new(key, value));
        };

        // The key is consumed by the recursive call; keep a copy for the
        // rotation case selection after it returns.
        let probe = key.clone();
        if key < self.nodes.get(handle).key {
            let left = self.nodes.get(handle).left;
            let child = self.insert_at(left, key, value);
            self.nodes.get_mut(handle).left = Some(child);
        } else {
            // Equal keys go right, same as the unbalanced index.
            let right = self.nodes.get(handle).right;
            let child = self.insert_at(right, key, value);
            self.nodes.get_mut(handle).right = Some(child);
        }

        self.update_height(handle);
        self.rebalance(handle, &probe)
    }

    /// Applies at most one rotation event at `handle` and returns the handle
    /// of the subtree root afterwards.
    fn rebalance(&mut self, handle: Handle, key: &K) -> Handle {
        let balance = self.balance_factor(handle);

        if balance > 1 {
            let left = self
                .nodes
                .get(handle)
                .left
                .expect("`BalancedIndex::rebalance()` - left-heavy node has no left child!");
            if *key < self.nodes.get(left).key {
                // Left-left: single right rotation.
                self.rotate_right(handle)
            } else {
                // Left-right: rotate the left child left, then this node right.
                let new_left = self.rotate_left(left);
                self.nodes.get_mut(handle).left = Some(new_left);
                self.rotate_right(handle)
            }
        } else if balance < -1 {
            let right = self
                .nodes
                .get(handle)
                .right
                .expect("`BalancedIndex::rebalance()` - right-heavy node has no right child!");
            if *key >= self.nodes.get(right).key {
                // Right-right: single left rotation. Ties land here because
                // equal keys were routed right on the way down.
                self.rotate_left(handle)
            } else {
                // Right-left: rotate the right child right, then this node left.
                let new_right = self.rotate_right(right);
                self.nodes.get_mut(handle).right = Some(new_right);
                self.rotate_left(handle)
            }
        } else {
            handle
        }
    }

    /// Left rotation: `z`'s right child `y` becomes the subtree root, `z`
    /// adopts `y`'s former left subtree. Heights recomputed children-first.
    fn rotate_left(&mut self, z: Handle) -> Handle {
        let y = self
            .nodes
            .get(z)
            .right
            .expect("`BalancedIndex::rotate_left()` - node has no right child!");
        let moved = self.nodes.get(y).left;
        self.nodes.get_mut(z).right = moved;
        self.nodes.get_mut(y).left = Some(z);
        self.update_height(z);
        self.update_height(y);
        y
    }

    /// Right rotation, mirror of [`rotate_left`](Self::rotate_left).
    fn rotate_right(&mut self, z: Handle) -> Handle {
        let y = self
            .nodes
            .get(z)
            .left
            .expect("`BalancedIndex::rotate_right()` - node has no left child!");
        let moved = self.nodes.get(y).right;
        self.nodes.get_mut(z).left = moved;
        self.nodes.get_mut(y).right = Some(z);
        self.update_height(z);
        self.update_height(y);
        y
    }

    fn height_of(&self, node: Option<Handle>) -> usize {
        node.map_or(0, |handle| self.nodes.get(handle).height)
    }

    fn update_height(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let (left, right) = (node.left, node.right);
        let height = 1 + self.height_of(left).max(self.height_of(right));
        self.nodes.get_mut(handle).height = height;
    }

    fn balance_factor(&self, handle: Handle) -> isize {
        let node = self.nodes.get(handle);
        let left = self.height_of(node.left);
        let right = self.height_of(node.right);
        #[allow(clippy::cast_possible_wrap)]
        {
            left as isize - right as isize
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn by_identity(value: &i64) -> i64 {
        *value
    }

    impl<K: Ord + Clone, V, F: Fn(&V) -> K> BalancedIndex<K, V, F> {
        /// Walks the whole tree checking stored heights and balance factors.
        /// Returns the verified height of the subtree.
        fn check_invariants(&self, node: Option<Handle>) -> usize {
            let Some(handle) = node else { return 0 };
            let n = self.nodes.get(handle);

            let left = self.check_invariants(n.left);
            let right = self.check_invariants(n.right);

            let height = 1 + left.max(right);
            assert_eq!(n.height, height, "stale height field");

            let balance = left as isize - right as isize;
            assert!((-1..=1).contains(&balance), "balance factor {balance} out of range");

            height
        }
    }

    #[test]
    fn empty_index() {
        let index = BalancedIndex::new(by_identity);
        assert!(index.is_empty());
        assert_eq!(index.height(), 0);
        assert_eq!(index.search(&0), None);
        assert_eq!(index.inorder(), vec![]);
    }

    #[test]
    fn duplicate_keys_all_kept_and_searchable() {
        // Three equal keys force an RR rotation that promotes the second
        // insertion to the root, so search only promises *a* value holding
        // the key, unlike the unbalanced index.
        let mut index = BalancedIndex::new(|&(key, _): &(i64, &str)| key);
        index.insert((5, "first"));
        index.insert((5, "second"));
        index.insert((5, "third"));

        assert_eq!(index.len(), 3);
        let &(key, name) = index.search(&5).expect("key 5 is present");
        assert_eq!(key, 5);
        assert!(["first", "second", "third"].contains(&name));
        assert_eq!(index.inorder().len(), 3);
        index.check_invariants(index.root);
    }

    #[test]
    fn increasing_keys_stay_logarithmic() {
        // Worst case for the unbalanced variant; the AVL must keep the
        // height within ceil(1.44 * log2(n + 2)), which for n = 1000 is 11.
        let mut index = BalancedIndex::new(by_identity);
        for key in 0..1000i64 {
            index.insert(key);
        }
        assert_eq!(index.len(), 1000);
        assert!(index.height() <= 11, "height {} exceeds AVL bound", index.height());
        index.check_invariants(index.root);
    }

    #[test]
    fn single_and_double_rotation_cases() {
        // LL: descending insertions force right rotations.
        let mut ll = BalancedIndex::new(by_identity);
        for key in [3, 2, 1] {
            ll.insert(key);
        }
        ll.check_invariants(ll.root);

        // LR: left child then its right descendant.
        let mut lr = BalancedIndex::new(by_identity);
        for key in [3, 1, 2] {
            lr.insert(key);
        }
        lr.check_invariants(lr.root);

        // RR: ascending insertions force left rotations.
        let mut rr = BalancedIndex::new(by_identity);
        for key in [1, 2, 3] {
            rr.insert(key);
        }
        rr.check_invariants(rr.root);

        // RL: right child then its left descendant.
        let mut rl = BalancedIndex::new(by_identity);
        for key in [1, 3, 2] {
            rl.insert(key);
        }
        rl.check_invariants(rl.root);

        for index in [&ll, &lr, &rr, &rl] {
            let keys: Vec<i64> = index.inorder().into_iter().map(|(k, _)| *k).collect();
            assert_eq!(keys, vec![1, 2, 3]);
            assert_eq!(index.height(), 2);
        }
    }

    proptest! {
        #[test]
        fn invariants_hold_after_every_insert(
            values in prop::collection::vec(-100i64..100, 0..256),
        ) {
            let mut index = BalancedIndex::new(by_identity);
            for &value in &values {
                index.insert(value);
                index.check_invariants(index.root);
            }

            let keys: Vec<i64> = index.inorder().into_iter().map(|(k, _)| *k).collect();
            let mut expected = values.clone();
            expected.sort_unstable();
            prop_assert_eq!(keys, expected);
        }

        #[test]
        fn search_matches_membership(
            values in prop::collection::vec(-100i64..100, 0..128),
            probe in -100i64..100,
        ) {
            let mut index = BalancedIndex::new(by_identity);
            for &value in &values {
                index.insert(value);
            }

            prop_assert_eq!(index.search(&probe).is_some(), values.contains(&probe));
        }
    }
}
