use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

use super::{
    BubbleSorter, HeapSorter, InsertionSorter, MergeSorter, QuickSorter, Recorder,
    SelectionSorter, Sorter,
};

/// The algorithms the [`SortEngine`](super::SortEngine) can run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Adjacent exchanges, no early exit
    Bubble,

    /// Repeated minimum search
    Selection,

    /// Shift larger elements right
    Insertion,

    /// Top-down merge sort
    Merge,

    /// Lomuto partition, last element as pivot
    Quick,

    /// Binary max-heap
    Heap,
}

/// Complexity and stability of an [`Algorithm`] as implemented here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
    pub stable: bool,
}

impl Algorithm {
    /// Every algorithm in presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    pub fn profile(&self) -> Profile {
        match self {
            // No early exit, so sorted input still costs n(n - 1) / 2 comparisons.
            Algorithm::Bubble => Profile {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: true,
            },
            Algorithm::Selection => Profile {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: false,
            },
            Algorithm::Insertion => Profile {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: true,
            },
            Algorithm::Merge => Profile {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
                stable: true,
            },
            Algorithm::Quick => Profile {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
                stable: false,
            },
            Algorithm::Heap => Profile {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(1)",
                stable: false,
            },
        }
    }

    /// Whether the algorithm needs O(n²) comparisons on typical input.
    pub fn is_quadratic(&self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion
        )
    }

    // Static dispatch to the matching sorter.
    pub(crate) fn run<T>(&self, slice: &mut [T], stats: &Recorder)
    where
        T: Ord + Clone,
    {
        match self {
            Algorithm::Bubble => BubbleSorter.sort(slice, stats),
            Algorithm::Selection => SelectionSorter.sort(slice, stats),
            Algorithm::Insertion => InsertionSorter.sort(slice, stats),
            Algorithm::Merge => MergeSorter.sort(slice, stats),
            Algorithm::Quick => QuickSorter.sort(slice, stats),
            Algorithm::Heap => HeapSorter.sort(slice, stats),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn stability_matches_the_sorters() {
        let stable = Algorithm::ALL
            .iter()
            .filter(|a| a.profile().stable)
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(
            stable,
            vec![Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge]
        );
    }

    #[test]
    fn quadratic_algorithms() {
        assert!(Algorithm::Bubble.is_quadratic());
        assert!(Algorithm::Selection.is_quadratic());
        assert!(Algorithm::Insertion.is_quadratic());
        assert!(!Algorithm::Merge.is_quadratic());
        assert!(!Algorithm::Quick.is_quadratic());
        assert!(!Algorithm::Heap.is_quadratic());
    }

    #[test]
    fn parses_from_the_command_line() {
        assert_eq!(
            Algorithm::from_str("quick", true).unwrap(),
            Algorithm::Quick
        );
        assert_eq!(
            Algorithm::from_str("Merge", true).unwrap(),
            Algorithm::Merge
        );
        assert!(Algorithm::from_str("bogo", true).is_err());
    }

    #[test]
    fn displays_the_name() {
        assert_eq!(Algorithm::Insertion.to_string(), "Insertion Sort");
    }
}
