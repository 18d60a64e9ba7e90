//! Comparison sorts over owned sequences.
//!
//! Every sorter consumes a `Vec<T>` and returns a permutation of it ordered by a strict ordering
//! relation: a function that returns `true` when its first argument must precede its second.
//! `Sort::sort` uses `<`. All three sorters are stable, so elements that the relation does not
//! order keep their relative positions.

mod insertion;
mod merge;

pub use self::insertion::{insertion_sort_by, InsertionSort};
pub use self::merge::{BottomUpMergeSort, MergeSort};

/// The capability set of a sorting algorithm.
pub trait Sort {
    /// Sorts `items` so that for every adjacent pair `(a, b)` of the result,
    /// `is_ordered_before(b, a)` is `false`.
    fn sort_by<T, F>(&self, items: Vec<T>, is_ordered_before: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> bool;

    /// Sorts `items` in non-decreasing order.
    fn sort<T>(&self, items: Vec<T>) -> Vec<T>
    where
        T: Ord,
    {
        self.sort_by(items, |a, b| a < b)
    }
}
