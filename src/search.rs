//! Binary search over sorted slices.
//!
//! Both searchers halve a range of a slice sorted in non-decreasing order until they either land
//! on an element equal to the key or the range becomes empty. They probe the same midpoints, so
//! they agree on every input; they only differ in how the halving is driven.
//!
//! The slice is not checked for sortedness. Searching an unsorted slice returns an unspecified
//! result.

use std::cmp::{self, Ordering};
use std::ops::Range;

/// The capability set of a binary searcher.
pub trait BinarySearch {
    /// Searches `items[range]` for `key` and returns the index of an element equal to it. Returns
    /// `None` if no element in the range is equal to `key`. The end of `range` is clamped to the
    /// length of `items`.
    ///
    /// If several elements are equal to `key`, any one of their indices may be returned.
    fn search_range<T>(&self, items: &[T], key: &T, range: Range<usize>) -> Option<usize>
    where
        T: Ord;

    /// Searches the whole of `items` for `key`.
    fn search<T>(&self, items: &[T], key: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.search_range(items, key, 0..items.len())
    }
}

fn midpoint(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}

/// Binary search that recurses on the half of the range that may contain the key.
///
/// Uses `O(log n)` stack frames.
///
/// # Examples
///
/// ```
/// use classic_collections::search::{BinarySearch, RecursiveBinarySearch};
///
/// let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
/// assert_eq!(RecursiveBinarySearch.search(&primes, &11), Some(4));
/// assert_eq!(RecursiveBinarySearch.search(&primes, &12), None);
/// assert_eq!(RecursiveBinarySearch.search_range(&primes, &11, 5..10), None);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RecursiveBinarySearch;

impl RecursiveBinarySearch {
    fn search_bounds<T>(items: &[T], key: &T, low: usize, high: usize) -> Option<usize>
    where
        T: Ord,
    {
        if low >= high {
            return None;
        }
        let mid = midpoint(low, high);
        match key.cmp(&items[mid]) {
            Ordering::Less => Self::search_bounds(items, key, low, mid),
            Ordering::Greater => Self::search_bounds(items, key, mid + 1, high),
            Ordering::Equal => Some(mid),
        }
    }
}

impl BinarySearch for RecursiveBinarySearch {
    fn search_range<T>(&self, items: &[T], key: &T, range: Range<usize>) -> Option<usize>
    where
        T: Ord,
    {
        Self::search_bounds(items, key, range.start, cmp::min(range.end, items.len()))
    }
}

/// Binary search that narrows a pair of bounds in a loop.
///
/// Uses `O(1)` extra space.
///
/// # Examples
///
/// ```
/// use classic_collections::search::{BinarySearch, IterativeBinarySearch};
///
/// let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
/// assert_eq!(IterativeBinarySearch.search(&primes, &29), Some(9));
/// assert_eq!(IterativeBinarySearch.search(&primes, &1), None);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IterativeBinarySearch;

impl BinarySearch for IterativeBinarySearch {
    fn search_range<T>(&self, items: &[T], key: &T, range: Range<usize>) -> Option<usize>
    where
        T: Ord,
    {
        let mut low = range.start;
        let mut high = cmp::min(range.end, items.len());
        while low < high {
            let mid = midpoint(low, high);
            match key.cmp(&items[mid]) {
                Ordering::Less => high = mid,
                Ordering::Greater => low = mid + 1,
                Ordering::Equal => return Some(mid),
            }
        }
        None
    }
}

/// Searches a sorted slice for `key` with `RecursiveBinarySearch`.
///
/// # Examples
///
/// ```
/// use classic_collections::search::binary_search_recursive;
///
/// assert_eq!(binary_search_recursive(&[1, 3, 5], &5), Some(2));
/// ```
pub fn binary_search_recursive<T>(items: &[T], key: &T) -> Option<usize>
where
    T: Ord,
{
    RecursiveBinarySearch.search(items, key)
}

/// Searches a sorted slice for `key` with `IterativeBinarySearch`.
///
/// # Examples
///
/// ```
/// use classic_collections::search::binary_search_iterative;
///
/// assert_eq!(binary_search_iterative(&[1, 3, 5], &4), None);
/// ```
pub fn binary_search_iterative<T>(items: &[T], key: &T) -> Option<usize>
where
    T: Ord,
{
    IterativeBinarySearch.search(items, key)
}
