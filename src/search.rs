//! Linear and binary search over sequences, used to verify index results
//! and locate ranks in a pre-sorted sequence.
//!
//! Absence is signalled with `None`, never a panic; callers check before
//! use.

/// Scans left to right and returns the first index whose extracted key
/// equals `target`, or `None`.
///
/// Works on unsorted input, which is its only legitimate use case. O(n).
///
/// # Examples
///
/// ```
/// use standings::search::linear_search;
///
/// assert_eq!(linear_search(&["a", "b", "a"], |&s| s, &"a"), Some(0));
/// assert_eq!(linear_search(&["a", "b", "a"], |&s| s, &"c"), None);
/// ```
pub fn linear_search<T, K, F>(items: &[T], key_of: F, target: &K) -> Option<usize>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    items.iter().position(|item| key_of(item) == *target)
}

/// Classic bisection over a sequence sorted ascending by the extracted key.
///
/// Returns *an* index whose key equals `target` (any position holding an
/// equal key is acceptable), or `None`, including on an empty sequence.
/// O(log n).
///
/// The sortedness precondition is the caller's obligation and is not
/// validated; on unsorted input the result is unspecified, not an error.
///
/// # Examples
///
/// ```
/// use standings::search::binary_search;
///
/// let found = binary_search(&[1, 2, 2, 5, 9], |&x| x, &2);
/// assert!(matches!(found, Some(1 | 2)));
/// assert_eq!(binary_search(&[1, 2, 2, 5, 9], |&x| x, &4), None);
/// ```
pub fn binary_search<T, K, F>(items: &[T], key_of: F, target: &K) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut low = 0usize;
    let mut high = items.len().checked_sub(1)?;

    while low <= high {
        let mid = (low + high) / 2;
        let key = key_of(&items[mid]);

        if key < *target {
            low = mid + 1;
        } else if key > *target {
            // `mid` can be 0 here; stepping below it means the target sits
            // left of the whole remaining window.
            high = mid.checked_sub(1)?;
        } else {
            return Some(mid);
        }
    }

    None
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn linear_search_returns_earliest_match() {
        let items = ["a", "b", "a"];
        assert_eq!(linear_search(&items, |&s| s, &"a"), Some(0));
        assert_eq!(linear_search(&items, |&s| s, &"b"), Some(1));
        assert_eq!(linear_search::<_, _, _>(&[], |s: &&str| *s, &"a"), None);
    }

    #[test]
    fn binary_search_duplicates_hit_any_equal_slot() {
        let items = [1, 2, 2, 5, 9];
        let found = binary_search(&items, |&x| x, &2);
        assert!(matches!(found, Some(1 | 2)));
    }

    #[test]
    fn binary_search_empty_is_not_found() {
        assert_eq!(binary_search::<i64, _, _>(&[], |&x| x, &3), None);
    }

    #[test]
    fn binary_search_misses_below_and_above() {
        let items = [10, 20, 30];
        assert_eq!(binary_search(&items, |&x| x, &5), None);
        assert_eq!(binary_search(&items, |&x| x, &25), None);
        assert_eq!(binary_search(&items, |&x| x, &35), None);
    }

    proptest! {
        #[test]
        fn binary_search_agrees_with_membership(
            mut values in prop::collection::vec(-500i64..500, 0..256),
            probe in -500i64..500,
        ) {
            values.sort_unstable();

            match binary_search(&values, |&x| x, &probe) {
                Some(index) => prop_assert_eq!(values[index], probe),
                None => prop_assert!(!values.contains(&probe)),
            }
        }

        #[test]
        fn linear_search_finds_smallest_index(
            values in prop::collection::vec(0u8..8, 0..64),
            probe in 0u8..8,
        ) {
            let expected = values.iter().position(|&v| v == probe);
            prop_assert_eq!(linear_search(&values, |&v| v, &probe), expected);
        }
    }
}
