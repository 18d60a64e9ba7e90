use crate::sort::Sort;

/// Sorts a slice in place by growing a sorted prefix one element at a time.
///
/// Each element is moved left past every prefix element it is ordered before. Runs in `O(n^2)`
/// time in the worst case and `O(n)` on input that is already sorted. The sort is stable.
///
/// # Examples
///
/// ```
/// use classic_collections::sort::insertion_sort_by;
///
/// let mut list = [10, -1, 3, 9, 2, 27, 8, 5, 1, 3, 0, 26];
/// insertion_sort_by(&mut list, |a, b| a > b);
/// assert_eq!(list, [27, 26, 10, 9, 8, 5, 3, 3, 2, 1, 0, -1]);
/// ```
pub fn insertion_sort_by<T, F>(items: &mut [T], mut is_ordered_before: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && is_ordered_before(&items[j], &items[j - 1]) {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Insertion sort.
///
/// # Examples
///
/// ```
/// use classic_collections::sort::{InsertionSort, Sort};
///
/// let list = vec![10, -1, 3, 9, 2, 27, 8, 5, 1, 3, 0, 26];
/// assert_eq!(
///     InsertionSort.sort(list),
///     vec![-1, 0, 1, 2, 3, 3, 5, 8, 9, 10, 26, 27],
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InsertionSort;

impl Sort for InsertionSort {
    fn sort_by<T, F>(&self, mut items: Vec<T>, is_ordered_before: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        insertion_sort_by(&mut items, is_ordered_before);
        items
    }
}
