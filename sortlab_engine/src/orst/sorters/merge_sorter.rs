use crate::orst::{Recorder, Sorter};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use sortlab_engine::orst::{MergeSorter, Recorder, Sorter};
///
/// let recorder = Recorder::new();
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice, &recorder);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Merge sort is a divide-and-conquer algorithm invented by John von Neumann in 1945. The slice
/// is split at `(len + 1) / 2`, so for odd lengths the left half holds the extra element, until
/// every run holds at most one element. Neighbouring sorted runs are then merged back together.
///
/// Merging copies both runs into auxiliary buffers and writes the smaller head back into the
/// slice. On ties the left head wins, which keeps the sort stable.
///
/// # Instrumentation
///
/// - one comparison per head-vs-head decision while merging
/// - one swap per element written back while both runs still have elements
/// - the leftover tail of a run, copied after the other run is exhausted, is not counted
///
/// The swap counter therefore always equals the comparison counter for this sorter.
pub struct MergeSorter;

fn merge_sort<T: Ord + Clone>(slice: &mut [T], stats: &Recorder) {
    if slice.len() <= 1 {
        return;
    }

    // Left half takes the extra element of an odd-length run.
    let mid = (slice.len() + 1) / 2;
    let (left, right) = slice.split_at_mut(mid);
    merge_sort(left, stats);
    merge_sort(right, stats);

    merge(slice, mid, stats);
}

// Merges the sorted runs `slice[..mid]` and `slice[mid..]`.
fn merge<T: Ord + Clone>(slice: &mut [T], mid: usize, stats: &Recorder) {
    let left = slice[..mid].to_vec();
    let right = slice[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        stats.record_comparison();
        if left[i] <= right[j] {
            slice[k] = left[i].clone();
            i += 1;
        } else {
            slice[k] = right[j].clone();
            j += 1;
        }
        stats.record_swap();
        k += 1;
    }

    for rest in left[i..].iter().chain(&right[j..]) {
        slice[k] = rest.clone();
        k += 1;
    }
}

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T], stats: &Recorder) {
        merge_sort(slice, stats)
    }
}
