use crate::orst::{Recorder, Sorter};

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use sortlab_engine::orst::{HeapSorter, Recorder, Sorter};
///
/// let recorder = Recorder::new();
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.sort(&mut slice, &recorder);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// The slice is first rearranged into a binary max-heap, bottom up. The largest element then sits
/// at the root; it is exchanged with the last element of the heap, the heap shrinks by one and the
/// new root is sifted down. Repeating this fills the slice from the back with the largest
/// remaining element.
///
/// Heap sort is in-place and O(n log n) in every case, but it is not stable.
///
/// # Instrumentation
///
/// - one comparison per child checked against the largest of its family while sifting down
/// - one swap per exchange while sifting down
/// - one swap per root moved to the end of the heap
pub struct HeapSorter;

fn sift_down<T: Ord>(heap: &mut [T], mut root: usize, stats: &Recorder) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < heap.len() {
            stats.record_comparison();
            if heap[left] > heap[largest] {
                largest = left;
            }
        }

        if right < heap.len() {
            stats.record_comparison();
            if heap[right] > heap[largest] {
                largest = right;
            }
        }

        if largest == root {
            return;
        }

        heap.swap(root, largest);
        stats.record_swap();
        root = largest;
    }
}

impl<T> Sorter<T> for HeapSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T], stats: &Recorder) {
        let n = slice.len();

        for root in (0..n / 2).rev() {
            sift_down(slice, root, stats);
        }

        for end in (1..n).rev() {
            slice.swap(0, end);
            stats.record_swap();
            sift_down(&mut slice[..end], 0, stats);
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn sort<T: Ord>(slice: &mut [T]) -> Recorder {
        let recorder = Recorder::new();
        HeapSorter.sort(slice, &recorder);
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
        sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn fixture_counts() {
        let mut slice = [64, 34, 25, 12, 22, 11, 90];
        let stats = sort(&mut slice);
        assert_eq!(slice, [11, 12, 22, 25, 34, 64, 90]);
        // building the heap: 8 child checks, 2 exchanges
        // extracting: 12 child checks, 6 root moves and 6 sift exchanges
        assert_eq!(stats.comparisons(), 20);
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

        // one child check while building the heap, one extraction
        let mut two = vec![2, 1];
        let stats = sort(&mut two);
        assert_eq!(two, vec![1, 2]);
        assert_eq!((stats.comparisons(), stats.swaps()), (1, 1));

        let mut two = vec![1, 2];
        sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
