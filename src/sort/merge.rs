use crate::sort::Sort;
use std::cmp;
use std::mem;

/// Merges two sorted piles into one. Takes from the left pile unless the head of the right pile is
/// ordered before the head of the left pile, which keeps the merge stable.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, is_ordered_before: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if is_ordered_before(r, l) {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

fn merge_sort_by<T, F>(mut items: Vec<T>, is_ordered_before: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, is_ordered_before);
    let right = merge_sort_by(right, is_ordered_before);
    merge(left, right, is_ordered_before)
}

/// Top-down merge sort.
///
/// Splits the sequence at its midpoint, sorts both halves recursively, and merges them. Runs in
/// `O(n log n)` time with `O(n)` auxiliary space and `O(log n)` recursion depth.
///
/// # Examples
///
/// ```
/// use classic_collections::sort::{MergeSort, Sort};
///
/// assert_eq!(MergeSort.sort(vec![2, 1, 5, 4, 9]), vec![1, 2, 4, 5, 9]);
/// assert_eq!(
///     MergeSort.sort(vec!["Tom", "Harry", "Ron", "Chandler", "Monica"]),
///     vec!["Chandler", "Harry", "Monica", "Ron", "Tom"],
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MergeSort;

impl Sort for MergeSort {
    fn sort_by<T, F>(&self, items: Vec<T>, mut is_ordered_before: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        merge_sort_by(items, &mut is_ordered_before)
    }
}

// Slots are `None` only transiently, between being moved out of `source` and the end of a pass.
fn slot_ordered_before<T, F>(a: &Option<T>, b: &Option<T>, is_ordered_before: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    match (a, b) {
        (Some(a), Some(b)) => is_ordered_before(a, b),
        _ => false,
    }
}

/// Merges the adjacent runs `source[start..mid]` and `source[mid..end]` into `target[start..end]`.
fn merge_runs<T, F>(
    source: &mut [Option<T>],
    target: &mut [Option<T>],
    start: usize,
    mid: usize,
    end: usize,
    is_ordered_before: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    let mut l = start;
    let mut r = mid;
    for slot in target[start..end].iter_mut() {
        let take_right = l == mid
            || (r < end && slot_ordered_before(&source[r], &source[l], is_ordered_before));
        let index = if take_right {
            r += 1;
            r - 1
        } else {
            l += 1;
            l - 1
        };
        *slot = source[index].take();
    }
}

/// Bottom-up merge sort.
///
/// Keeps two buffers of the same length. Each pass merges adjacent runs of the current width from
/// the read buffer into the write buffer, then the buffers trade roles and the width doubles,
/// starting at 1 and stopping once a single run spans the whole sequence. Runs in `O(n log n)`
/// time with `O(n)` auxiliary space and no recursion.
///
/// # Examples
///
/// ```
/// use classic_collections::sort::{BottomUpMergeSort, Sort};
///
/// assert_eq!(BottomUpMergeSort.sort(vec![2, 1, 5, 4, 9]), vec![1, 2, 4, 5, 9]);
/// assert_eq!(
///     BottomUpMergeSort.sort_by(vec![2, 1, 5, 4, 9], |a, b| a > b),
///     vec![9, 5, 4, 2, 1],
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BottomUpMergeSort;

impl Sort for BottomUpMergeSort {
    fn sort_by<T, F>(&self, items: Vec<T>, mut is_ordered_before: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let len = items.len();
        let mut source: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let mut target: Vec<Option<T>> = Vec::with_capacity(len);
        target.resize_with(len, || None);

        let mut width = 1;
        while width < len {
            trace!("merging runs of width {} over {} elements", width, len);
            let mut start = 0;
            while start < len {
                let mid = cmp::min(start + width, len);
                let end = cmp::min(start + 2 * width, len);
                merge_runs(&mut source, &mut target, start, mid, end, &mut is_ordered_before);
                start += 2 * width;
            }
            mem::swap(&mut source, &mut target);
            width *= 2;
        }

        source.into_iter().flatten().collect()
    }
}
