//! Classic sorting algorithms instrumented with comparison, swap and timing statistics.
//!
//! Every algorithm sorts a private copy of its input and hands back the sorted copy together with
//! the [`Statistics`] of that run. The caller's sequence is never touched.
//!
//! # Example
//!
//! ```
//! use sortlab_engine::orst::SortEngine;
//!
//! let engine = SortEngine::new();
//! let input = vec![64, 34, 25, 12, 22, 11, 90];
//!
//! let (sorted, stats) = engine.bubble_sort(&input);
//! assert_eq!(sorted, vec![11, 12, 22, 25, 34, 64, 90]);
//! assert_eq!(stats.comparisons(), 21);
//! assert_eq!(input, vec![64, 34, 25, 12, 22, 11, 90]);
//! ```
//!
//! The sorters can also be driven directly over a mutable slice with a [`Recorder`]:
//!
//! ```
//! use sortlab_engine::orst::{QuickSorter, Recorder, Sorter};
//!
//! let recorder = Recorder::new();
//! let mut slice = vec![1, 3, 2, 5, 4];
//! QuickSorter.sort(&mut slice, &recorder);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! ```

mod algorithm;
pub mod benchmark;
mod engine;
mod sorters;
mod stats;

pub use algorithm::{Algorithm, Profile};
pub use engine::SortEngine;
pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::heap_sorter::HeapSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::selection_sorter::SelectionSorter;
pub use stats::{Recorder, Statistics};

/// The sorting algorithm must implement the trait `Sorter`.
///
/// Implementations sort `slice` in place in ascending order and report every comparison and every
/// data movement to `stats` at the points their algorithm defines. They never reset `stats`; that
/// is the job of whoever owns the run (see [`SortEngine`]).
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T], stats: &Recorder);
}
