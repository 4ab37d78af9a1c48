use crate::orst::{Recorder, Sorter};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use sortlab_engine::orst::{BubbleSorter, Recorder, Sorter};
///
/// let recorder = Recorder::new();
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice, &recorder);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
/// assert_eq!(recorder.comparisons(), 10);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. After pass `i` the
/// `i + 1` largest elements have "bubbled" to the end of
/// the list, so every pass can stop one element earlier.
///
/// This version never exits early: even an already sorted list
/// costs exactly `n(n - 1) / 2` comparisons.
///
/// # Instrumentation
///
/// - one comparison per adjacent pair examined
/// - one swap per exchange of an out of order pair
#[derive(Default)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T], stats: &Recorder) {
        let n = slice.len();

        for pass in 0..n.saturating_sub(1) {
            for j in 0..(n - pass - 1) {
                stats.record_comparison();
                if slice[j] > slice[j + 1] {
                    slice.swap(j, j + 1);
                    stats.record_swap();
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
        BubbleSorter.sort(slice, &recorder);
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
        assert_eq!(stats.comparisons(), 36);
        assert_eq!(stats.swaps(), 0);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        let stats = sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
        // every pair is inverted
        assert_eq!(stats.swaps(), 999 * 998 / 2);
    }

    #[test]
    fn fixture_counts() {
        let mut slice = [64, 34, 25, 12, 22, 11, 90];
        let stats = sort(&mut slice);
        assert_eq!(slice, [11, 12, 22, 25, 34, 64, 90]);
        assert_eq!(stats.comparisons(), 21);
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
