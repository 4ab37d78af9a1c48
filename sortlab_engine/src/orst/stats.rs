//! Comparison, swap and timing instrumentation shared by every [`Sorter`](super::Sorter).

use serde::Serialize;
use std::{
    cell::Cell,
    fmt::Display,
    time::{Duration, Instant},
};

/// Mutable counters driven by a sorter while it runs.
///
/// The counters live in [`Cell`]s so that a sorter (and its recursive helpers) only needs a shared
/// reference to record events. This also makes the recorder `!Sync`: a single recorder can only
/// ever be written from one thread.
///
/// ```
/// use sortlab_engine::orst::Recorder;
///
/// let recorder = Recorder::new();
/// recorder.record_comparison();
/// recorder.record_comparison();
/// recorder.record_swap();
///
/// let stats = recorder.snapshot();
/// assert_eq!(stats.comparisons(), 2);
/// assert_eq!(stats.swaps(), 1);
/// ```
#[derive(Debug)]
pub struct Recorder {
    comparisons: Cell<u64>,
    swaps: Cell<u64>,
    start: Cell<Instant>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            comparisons: Cell::new(0),
            swaps: Cell::new(0),
            start: Cell::new(Instant::now()),
        }
    }

    /// Zeroes both counters and restarts the clock.
    pub fn reset(&self) {
        self.comparisons.set(0);
        self.swaps.set(0);
        self.start.set(Instant::now());
    }

    #[inline]
    pub fn record_comparison(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }

    /// Records one data movement. What counts as a movement depends on the algorithm: an exchange
    /// for bubble, selection, quick and heap sort, a shift for insertion sort and a placement
    /// while comparing for merge sort.
    #[inline]
    pub fn record_swap(&self) {
        self.swaps.set(self.swaps.get() + 1);
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons.get()
    }

    pub fn swaps(&self) -> u64 {
        self.swaps.get()
    }

    pub fn elapsed(&self) -> Duration {
        self.start.get().elapsed()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Freezes the current figures into an immutable [`Statistics`].
    pub fn snapshot(&self) -> Statistics {
        Statistics {
            comparisons: self.comparisons(),
            swaps: self.swaps(),
            elapsed: self.elapsed(),
        }
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

/// The figures of a single sorting run.
///
/// Displays as `Comparisons: <c>, Swaps: <s>, Time: <t> seconds` with the time printed to six
/// decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    comparisons: u64,
    swaps: u64,
    #[serde(rename = "time", serialize_with = "as_seconds")]
    elapsed: Duration,
}

impl Statistics {
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Comparisons: {}, Swaps: {}, Time: {:.6} seconds",
            self.comparisons,
            self.swaps,
            self.elapsed_seconds()
        )
    }
}

fn as_seconds<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn starts_zeroed() {
        let recorder = Recorder::new();
        assert_eq!(recorder.comparisons(), 0);
        assert_eq!(recorder.swaps(), 0);
        assert!(recorder.elapsed_seconds() >= 0.0);
    }

    #[test]
    fn counts_only_increase() {
        let recorder = Recorder::new();
        for _ in 0..5 {
            recorder.record_comparison();
        }
        for _ in 0..3 {
            recorder.record_swap();
        }
        assert_eq!(recorder.comparisons(), 5);
        assert_eq!(recorder.swaps(), 3);
    }

    #[test]
    fn reset_clears_counts() {
        let recorder = Recorder::new();
        recorder.record_comparison();
        recorder.record_swap();
        recorder.reset();
        assert_eq!(recorder.comparisons(), 0);
        assert_eq!(recorder.swaps(), 0);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let recorder = Recorder::new();
        let first = recorder.elapsed_seconds();
        let second = recorder.elapsed_seconds();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn display_has_six_decimals() {
        let stats = Statistics {
            comparisons: 21,
            swaps: 14,
            elapsed: Duration::from_micros(1500),
        };
        assert_eq!(
            stats.to_string(),
            "Comparisons: 21, Swaps: 14, Time: 0.001500 seconds"
        );

        let zero = Statistics {
            comparisons: 0,
            swaps: 0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(
            zero.to_string(),
            "Comparisons: 0, Swaps: 0, Time: 0.000000 seconds"
        );
    }

    #[test]
    fn serializes_time_in_seconds() {
        let stats = Statistics {
            comparisons: 3,
            swaps: 2,
            elapsed: Duration::from_millis(250),
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["comparisons"], 3);
        assert_eq!(json["swaps"], 2);
        assert_eq!(json["time"], 0.25);
    }
}
