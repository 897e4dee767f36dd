//! Stable comparison sorting, parametrized by a key-extraction function.
//!
//! [`merge_sort`] is the real sorter: stable, O(n log n), O(n) auxiliary
//! space per merge level. [`bubble_sort`] is kept as the O(n²) reference
//! baseline; for any input and key function the two produce identical
//! output.

use alloc::vec::Vec;

/// Sorts `items` ascending by the extracted key using a stable merge sort.
///
/// The input is split at the midpoint, each half sorted recursively, and the
/// halves merged by repeatedly taking the smaller-or-equal head. Ties take
/// from the left half, which holds the elements that came first in the
/// original order. That is what makes the sort stable. Inputs of length
/// 0 and 1 are already-sorted base cases.
///
/// # Examples
///
/// ```
/// use standings::sort::merge_sort;
///
/// let sorted = merge_sort(&[("X", 1), ("Y", 5), ("Z", 1)], |&(_, score)| score);
/// assert_eq!(sorted, [("X", 1), ("Z", 1), ("Y", 5)]);
/// ```
pub fn merge_sort<T, K, F>(items: &[T], key_of: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_slice(items, &key_of)
}

fn sort_slice<T, K, F>(items: &[T], key_of: &F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = sort_slice(&items[..mid], key_of);
    let right = sort_slice(&items[mid..], key_of);
    merge(left, right, key_of)
}

fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key_of: &F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            // Ties take from the left half; see the stability note above.
            (Some(l), Some(r)) => key_of(l) <= key_of(r),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        if take_left {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged
}

/// Sorts `items` ascending by the extracted key using bubble sort.
///
/// The O(n²) adjacent-exchange baseline, kept for comparison against
/// [`merge_sort`]. Also stable (adjacent swaps only happen on strict
/// inversions), with an early exit when a full pass performs no exchange.
pub fn bubble_sort<T, K, F>(items: &[T], key_of: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut items = items.to_vec();
    let n = items.len();

    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if key_of(&items[j + 1]) < key_of(&items[j]) {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    items
}
