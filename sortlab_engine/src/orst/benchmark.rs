use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use rand::{rngs::StdRng, SeedableRng};

use super::{Algorithm, SortEngine, Statistics};
use crate::input::random_sequence;

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const THOUSAND: usize = 1_000;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;

/// List sizes every benchmark goes through.
pub const SIZES: [usize; 6] = [ZERO, ONE, HUNDRED, THOUSAND, TEN_THOUSAND, HUNDRED_THOUSAND];

const VALUE_RANGE: std::ops::Range<i64> = i64::MIN..i64::MAX;

/// The outcome of one algorithm on one list size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Ran(Statistics),
    /// Quadratic algorithm on a list larger than the configured limit.
    Skipped,
}

/// Runs every algorithm over the same random list of size `n`.
///
/// Quadratic algorithms are skipped when `n` exceeds `max_quadratic`.
pub fn bench_size(
    engine: &SortEngine,
    values: &[i64],
    max_quadratic: usize,
    pb: &ProgressBar,
) -> Vec<(Algorithm, Outcome)> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            pb.set_message(algorithm.name());
            let outcome = if algorithm.is_quadratic() && values.len() > max_quadratic {
                Outcome::Skipped
            } else {
                let (sorted, stats) = engine.sort(algorithm, values);
                debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
                Outcome::Ran(stats)
            };
            pb.inc(1);
            (algorithm, outcome)
        })
        .collect()
}

/// Prints a comparison table of every algorithm for each of the [`SIZES`].
pub fn run_orst(max_quadratic: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut random = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let engine = SortEngine::new();

    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len}) {msg}",
    )?;

    for &n in &SIZES {
        let values = random_sequence(&mut random, n, VALUE_RANGE);

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let pb = ProgressBar::new(Algorithm::ALL.len() as u64).with_style(style.clone());
        let results = bench_size(&engine, &values, max_quadratic, &pb);
        pb.finish_and_clear();

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Swaps Made".bold(),
            "Time Taken".bold()
        ]);

        for (algorithm, outcome) in results {
            match outcome {
                Outcome::Ran(stats) => table.add_row(row![
                    algorithm.name(),
                    stats.comparisons().to_string(),
                    stats.swaps().to_string(),
                    format!("{:?}", stats.elapsed())
                ]),
                Outcome::Skipped => table.add_row(row![
                    algorithm.name(),
                    "Not Doing It".red(),
                    "-",
                    "It is Stupid"
                ]),
            };
        }

        table.printstd();
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn skips_quadratic_sorters_above_the_limit() {
        let engine = SortEngine::new();
        let values = (0..50).rev().collect::<Vec<i64>>();
        let pb = ProgressBar::hidden();

        let results = bench_size(&engine, &values, 10, &pb);
        assert_eq!(results.len(), Algorithm::ALL.len());
        assert_eq!(pb.position(), Algorithm::ALL.len() as u64);

        for (algorithm, outcome) in results {
            if algorithm.is_quadratic() {
                assert_eq!(outcome, Outcome::Skipped);
            } else {
                assert!(matches!(outcome, Outcome::Ran(_)));
            }
        }
    }

    #[test]
    fn runs_everything_below_the_limit() {
        let engine = SortEngine::new();
        let values = vec![5, 3, 9, 1];
        let pb = ProgressBar::hidden();

        let results = bench_size(&engine, &values, 10, &pb);
        assert!(results
            .iter()
            .all(|(_, outcome)| matches!(outcome, Outcome::Ran(_))));
    }
}
