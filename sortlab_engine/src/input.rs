//! Building input sequences: parsing them from text or generating them at random.

use clap::ValueEnum;
use rand::Rng;
use std::ops::Range;
use thiserror::Error;

/// The fixed list every demo run starts from unless told otherwise.
pub const SAMPLE: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Value range used for random lists when none is given.
pub const DEFAULT_RANGE: Range<i64> = 20..400;

/// Named lists that put the algorithms in their best, worst and special cases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Best case for most algorithms
    Sorted,

    /// Worst case for many algorithms
    Reverse,

    /// Two adjacent pairs out of place
    NearlySorted,

    /// Two values repeated
    ManyDuplicates,

    /// Every element identical
    AllSame,

    /// Increases then decreases
    Mountain,

    /// Decreases then increases
    Valley,

    /// High-low pattern
    Alternating,

    /// Three elements
    Tiny,

    /// One element
    Single,

    /// Two elements
    Pair,
}

impl Preset {
    pub const ALL: [Preset; 11] = [
        Preset::Sorted,
        Preset::Reverse,
        Preset::NearlySorted,
        Preset::ManyDuplicates,
        Preset::AllSame,
        Preset::Mountain,
        Preset::Valley,
        Preset::Alternating,
        Preset::Tiny,
        Preset::Single,
        Preset::Pair,
    ];

    pub fn values(&self) -> Vec<i64> {
        match self {
            Preset::Sorted => (1..=10).collect(),
            Preset::Reverse => (1..=10).rev().collect(),
            Preset::NearlySorted => vec![1, 2, 3, 5, 4, 6, 7, 9, 8, 10],
            Preset::ManyDuplicates => vec![5, 3, 5, 3, 5, 3, 5, 3],
            Preset::AllSame => vec![7; 7],
            Preset::Mountain => vec![1, 3, 5, 7, 9, 8, 6, 4, 2],
            Preset::Valley => vec![9, 7, 5, 3, 1, 2, 4, 6, 8],
            Preset::Alternating => vec![1, 10, 2, 9, 3, 8, 4, 7, 5, 6],
            Preset::Tiny => vec![3, 1, 2],
            Preset::Single => vec![42],
            Preset::Pair => vec![5, 2],
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("please enter some values")]
    Empty,

    #[error("empty value at position {position}")]
    EmptyValue { position: usize },

    #[error("\"{value}\" at position {position} is not a valid integer")]
    InvalidNumber { position: usize, value: String },
}

/// Parses a comma separated list of integers such as `"5, -3, 12"`.
///
/// Whitespace around values is ignored. Positions in errors are zero based.
///
/// ```
/// use sortlab_engine::input::{parse_sequence, InputError};
///
/// assert_eq!(parse_sequence(" 5, -3,12 ").unwrap(), vec![5, -3, 12]);
/// assert_eq!(
///     parse_sequence("1,,2"),
///     Err(InputError::EmptyValue { position: 1 })
/// );
/// ```
pub fn parse_sequence(input: &str) -> Result<Vec<i64>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }

    input
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(position, value)| {
            if value.is_empty() {
                return Err(InputError::EmptyValue { position });
            }
            value.parse::<i64>().map_err(|_| InputError::InvalidNumber {
                position,
                value: value.to_string(),
            })
        })
        .collect()
}

/// Generates `len` values drawn uniformly from `range`.
///
/// # Panics
///
/// Panics if `range` is empty and `len` is not zero.
pub fn random_sequence<R>(rng: &mut R, len: usize, range: Range<i64>) -> Vec<i64>
where
    R: Rng,
{
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}
