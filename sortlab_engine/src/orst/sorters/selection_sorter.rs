use crate::orst::{Recorder, Sorter};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use sortlab_engine::orst::{Recorder, SelectionSorter, Sorter};
///
/// let recorder = Recorder::new();
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice, &recorder);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting
/// algorithm. It has an O(n2) time complexity, which
/// makes it inefficient on large  lists, and generally
/// performs worse than the similar insertion sort. It does
/// however perform at most `n - 1` exchanges, which is the
/// fewest of any algorithm in this crate.
///
/// # Algorithm
///
/// The algorithm divides the input list into two parts:
/// a sorted sublist of items which is built
/// up from left to right at the front (
/// left) of the list and a sublist of
/// the remaining unsorted items that occupy the rest of
/// the list. The algorithm proceeds by finding the smallest
/// element in the unsorted sublist, exchanging (swapping
/// ) it with the leftmost unsorted element, and moving the sublist
/// boundaries one element to the right.
///
/// The exchange can jump an element over equal ones, so the sort is not stable.
///
/// # Instrumentation
///
/// - one comparison per element checked against the current minimum
/// - one swap per pass whose minimum is not already in place
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T], stats: &Recorder) {
        let n = slice.len();

        for unsorted in 0..n.saturating_sub(1) {
            let mut smallest_in_rest = unsorted;
            for i in (unsorted + 1)..n {
                stats.record_comparison();
                if slice[i] < slice[smallest_in_rest] {
                    smallest_in_rest = i;
                }
            }
            if unsorted != smallest_in_rest {
                slice.swap(unsorted, smallest_in_rest);
                stats.record_swap();
            }
        }
    }
}
