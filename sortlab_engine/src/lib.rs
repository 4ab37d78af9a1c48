//! # Introduction
//!
//! Classic sorting algorithms (bubble, selection, insertion, merge, quick and heap sort)
//! instrumented with a recorder that counts comparisons and swaps and times every run.
//!
//! See the [`orst`] module for the algorithms and [`input`] for building sequences to sort.

pub mod input;
pub mod orst;

use clap::{Args, Subcommand};
use colored::Colorize;
use prettytable::{row, Table};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use input::{parse_sequence, random_sequence, Preset, DEFAULT_RANGE, SAMPLE};
use orst::{Algorithm, SortEngine, Statistics};

/// Run the instrumented sorters from the commandline. Run `sortlab sort --help` to see what
/// options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SortArgs {
    #[command(subcommand)]
    command: SortCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SortCommands {
    /// Run every algorithm on the same list and print the statistics of each run.
    Demo {
        /// Comma separated list of integers to sort instead of the built-in sample.
        #[arg(short, long, allow_hyphen_values = true)]
        input: Option<String>,

        /// Sort a random list of this many values instead of the built-in sample.
        #[arg(short, long, conflicts_with = "input")]
        random: Option<usize>,

        /// Seed for the random list.
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        /// Sort one of the named lists instead of the built-in sample.
        #[arg(short, long, value_enum, conflicts_with_all = ["input", "random"])]
        preset: Option<Preset>,

        /// Print a JSON report instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Run a single algorithm.
    Run {
        /// The algorithm to run.
        #[arg(short, long, value_enum, required = true)]
        algorithm: Algorithm,

        /// Comma separated list of integers to sort.
        #[arg(allow_hyphen_values = true)]
        values: String,

        /// Print a JSON report instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the complexity and stability of every algorithm.
    Info,

    /// Compare every algorithm on random lists of growing size.
    Bench {
        /// Largest list the quadratic sorters (bubble, selection, insertion) are run on.
        #[arg(long, default_value_t = 10_000)]
        max_quadratic: usize,

        /// Seed for the random lists.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// One algorithm's result on the report input.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub sorted: Vec<i64>,
    #[serde(flatten)]
    pub stats: Statistics,
}

/// The results of a set of algorithms on the same input.
#[derive(Debug, Serialize)]
pub struct Report {
    pub input: Vec<i64>,
    pub runs: Vec<RunReport>,
}

impl Report {
    /// Runs each of `algorithms` over `input`.
    pub fn new(input: Vec<i64>, algorithms: &[Algorithm]) -> Self {
        let engine = SortEngine::new();
        let runs = algorithms
            .iter()
            .map(|&algorithm| {
                let (sorted, stats) = engine.sort(algorithm, &input);
                RunReport {
                    algorithm,
                    sorted,
                    stats,
                }
            })
            .collect();

        Self { input, runs }
    }

    fn print(&self) {
        println!("{} {:?}", "Original array:".bold(), self.input);
        println!("{}", "=".repeat(50));

        for run in &self.runs {
            println!("\n{}", format!("{}:", run.algorithm.name()).bold().cyan());
            println!("Sorted array: {:?}", run.sorted);
            println!("{}", run.stats);
        }
    }

    fn print_json(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

fn print_info() {
    let mut table = Table::new();
    table.add_row(row![
        "Sorter".bold(),
        "Best".bold(),
        "Average".bold(),
        "Worst".bold(),
        "Space".bold(),
        "Stable".bold()
    ]);

    for algorithm in Algorithm::ALL {
        let profile = algorithm.profile();
        let stable = if profile.stable {
            "Yes".green()
        } else {
            "No".red()
        };
        table.add_row(row![
            algorithm.name(),
            profile.best,
            profile.average,
            profile.worst,
            profile.space,
            stable
        ]);
    }

    table.printstd();
}

impl SortArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            SortCommands::Demo {
                input,
                random,
                seed,
                preset,
                json,
            } => {
                let values = match (input, random, preset) {
                    (Some(input), _, _) => parse_sequence(&input)?,
                    (None, Some(len), _) => {
                        let mut rng = match seed {
                            Some(seed) => StdRng::seed_from_u64(seed),
                            None => StdRng::from_entropy(),
                        };
                        random_sequence(&mut rng, len, DEFAULT_RANGE)
                    }
                    (None, None, Some(preset)) => preset.values(),
                    (None, None, None) => SAMPLE.to_vec(),
                };

                let report = Report::new(values, &Algorithm::ALL);
                if json {
                    report.print_json()?;
                } else {
                    report.print();
                }
            }

            SortCommands::Run {
                algorithm,
                values,
                json,
            } => {
                let values = parse_sequence(&values)?;
                let report = Report::new(values, &[algorithm]);
                if json {
                    report.print_json()?;
                } else {
                    report.print();
                }
            }

            SortCommands::Info => print_info(),

            SortCommands::Bench {
                max_quadratic,
                seed,
            } => orst::benchmark::run_orst(max_quadratic, seed)?,
        }

        Ok(())
    }
}
