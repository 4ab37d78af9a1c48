use crate::orst::{Recorder, Sorter};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Sorting is done in-place, by iterating up the array, growing the sorted list behind it. At each
/// array-position, it checks the value there against the largest value in the sorted list (which
/// happens to be next to it, in the previous array-position checked). If larger, it leaves the
/// element in place and moves to the next. If smaller, it shifts the larger values of the sorted
/// list up one at a time until the element reaches its slot.
///
/// Equal elements are never shifted past each other, so the sort is stable.
///
/// # Instrumentation
///
/// - one comparison per preceding element examined
/// - one swap per element shifted to the right
/// - dropping the held element into its final slot is not counted
///
/// # Usage
///```
/// use sortlab_engine::orst::{InsertionSorter, Recorder, Sorter};
///
/// let recorder = Recorder::new();
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter.sort(&mut slice, &recorder);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
pub struct InsertionSorter;

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T], stats: &Recorder) {
        for unsorted in 1..slice.len() {
            // `slice[i]` is the held element. Walking it left one slot is the same as shifting
            // the larger neighbour right.
            let mut i = unsorted;
            while i > 0 {
                stats.record_comparison();
                if slice[i - 1] > slice[i] {
                    slice.swap(i - 1, i);
                    stats.record_swap();
                    i -= 1;
                } else {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn sort<T: Ord>(slice: &mut [T]) -> Recorder {
        let recorder = Recorder::new();
        InsertionSorter.sort(slice, &recorder);
        recorder
    }

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        let stats = sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
        // one look back per element, nothing moves
        assert_eq!(stats.comparisons(), 8);
        assert_eq!(stats.swaps(), 0);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        let stats = sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
        assert_eq!(stats.comparisons(), 999 * 998 / 2);
        assert_eq!(stats.swaps(), 999 * 998 / 2);
    }

    #[test]
    fn fixture_counts() {
        let mut slice = [64, 34, 25, 12, 22, 11, 90];
        let stats = sort(&mut slice);
        assert_eq!(slice, [11, 12, 22, 25, 34, 64, 90]);
        assert_eq!(stats.comparisons(), 16);
        assert_eq!(stats.swaps(), 14);
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        let stats = sort(&mut empty);
        assert!(empty.is_empty());
        assert_eq!((stats.comparisons(), stats.swaps()), (0, 0));

        let mut one = vec![1];
        let stats = sort(&mut one);
        assert_eq!(one, vec![1]);
        assert_eq!((stats.comparisons(), stats.swaps()), (0, 0));

        let mut two = vec![1, 2];
        sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
