use super::{Algorithm, Recorder, Statistics};

/// Runs the sorters over private copies of their input.
///
/// Every call owns a fresh [`Recorder`] and returns its [`Statistics`] alongside the sorted copy,
/// so no figures are ever shared between calls.
///
/// ```
/// use sortlab_engine::orst::{Algorithm, SortEngine};
///
/// let engine = SortEngine::new();
/// let (sorted, stats) = engine.sort(Algorithm::Selection, &[2, 1, 3]);
///
/// assert_eq!(sorted, vec![1, 2, 3]);
/// assert_eq!(stats.comparisons(), 3);
/// assert_eq!(stats.swaps(), 1);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SortEngine;

impl SortEngine {
    pub fn new() -> Self {
        Self
    }

    /// Sorts a copy of `input` with `algorithm`.
    #[tracing::instrument(level = "trace", skip_all, fields(%algorithm, len = input.len()))]
    pub fn sort<T>(&self, algorithm: Algorithm, input: &[T]) -> (Vec<T>, Statistics)
    where
        T: Ord + Clone,
    {
        let mut sorted = input.to_vec();

        let recorder = Recorder::new();
        recorder.reset();
        algorithm.run(&mut sorted, &recorder);
        let stats = recorder.snapshot();

        tracing::debug!(
            comparisons = stats.comparisons(),
            swaps = stats.swaps(),
            seconds = stats.elapsed_seconds(),
            "sort finished"
        );

        (sorted, stats)
    }

    pub fn bubble_sort<T: Ord + Clone>(&self, input: &[T]) -> (Vec<T>, Statistics) {
        self.sort(Algorithm::Bubble, input)
    }

    pub fn selection_sort<T: Ord + Clone>(&self, input: &[T]) -> (Vec<T>, Statistics) {
        self.sort(Algorithm::Selection, input)
    }

    pub fn insertion_sort<T: Ord + Clone>(&self, input: &[T]) -> (Vec<T>, Statistics) {
        self.sort(Algorithm::Insertion, input)
    }

    pub fn merge_sort<T: Ord + Clone>(&self, input: &[T]) -> (Vec<T>, Statistics) {
        self.sort(Algorithm::Merge, input)
    }

    pub fn quick_sort<T: Ord + Clone>(&self, input: &[T]) -> (Vec<T>, Statistics) {
        self.sort(Algorithm::Quick, input)
    }

    pub fn heap_sort<T: Ord + Clone>(&self, input: &[T]) -> (Vec<T>, Statistics) {
        self.sort(Algorithm::Heap, input)
    }
}
