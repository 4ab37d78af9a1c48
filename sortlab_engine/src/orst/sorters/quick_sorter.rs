use crate::orst::{Recorder, Sorter};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use sortlab_engine::orst::{QuickSorter, Recorder, Sorter};
///
/// let recorder = Recorder::new();
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice, &recorder);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// the pivot or not. The sub-arrays are then sorted recursively.
///
/// This sorter uses the Lomuto partition scheme with the last element as the pivot. There is no
/// randomisation and no median-of-three, so already sorted (or reverse sorted) input hits the
/// O(n²) worst case. Recursion only ever descends into the smaller partition, which keeps the
/// stack depth logarithmic even then.
///
/// # Instrumentation
///
/// - one comparison per element tested against the pivot
/// - one swap per exchange that grows the less-than-pivot region, even when an element is
///   exchanged with itself
/// - one swap per partition for moving the pivot into place
pub struct QuickSorter;

// Lomuto partition around the last element. Returns the final index of the pivot.
fn partition<T: Ord>(slice: &mut [T], stats: &Recorder) -> usize {
    let high = slice.len() - 1;

    // Everything before `boundary` is less than the pivot.
    let mut boundary = 0;
    for j in 0..high {
        stats.record_comparison();
        if slice[j] < slice[high] {
            slice.swap(boundary, j);
            stats.record_swap();
            boundary += 1;
        }
    }

    slice.swap(boundary, high);
    stats.record_swap();
    boundary
}

fn quicksort<T: Ord>(mut slice: &mut [T], stats: &Recorder) {
    while slice.len() > 1 {
        let pivot = partition(slice, stats);

        let (left, right) = std::mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, stats);
            slice = right;
        } else {
            quicksort(right, stats);
            slice = left;
        }
    }
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T], stats: &Recorder) {
        quicksort(slice, stats)
    }
}
