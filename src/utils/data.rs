//! Reproducible input sequences for measurements.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Shape of the generated input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputPattern {
    /// Uniform values in `[-size, size)`
    #[default]
    Random,
    /// Already ascending
    Sorted,
    /// Strictly descending
    Reversed,
    /// Shuffled values drawn from a handful of distinct keys
    FewUnique,
}

impl InputPattern {
    pub const ALL: [InputPattern; 4] = [
        InputPattern::Random,
        InputPattern::Sorted,
        InputPattern::Reversed,
        InputPattern::FewUnique,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputPattern::Random => "random",
            InputPattern::Sorted => "sorted",
            InputPattern::Reversed => "reversed",
            InputPattern::FewUnique => "few-unique",
        }
    }
}

impl fmt::Display for InputPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputPattern::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                format!(
                    "unknown pattern '{}' (expected one of: random, sorted, reversed, few-unique)",
                    s
                )
            })
    }
}

/// Generate `size` integers following `pattern`.
pub fn generate(pattern: InputPattern, size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bound = (size.max(1)).min(i32::MAX as usize) as i32;

    match pattern {
        InputPattern::Random => (0..size).map(|_| rng.random_range(-bound..bound)).collect(),
        InputPattern::Sorted => (0..bound).take(size).collect(),
        InputPattern::Reversed => (0..bound).take(size).rev().collect(),
        InputPattern::FewUnique => {
            let mut data: Vec<i32> = (0..size).map(|i| (i % 4) as i32 * 10).collect();
            data.shuffle(&mut rng);
            data
        }
    }
}

/// Sorted input for binary search, with duplicates, plus a mix of present and absent targets.
pub fn search_workload(size: usize, seed: u64) -> (Vec<i32>, Vec<i32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<i32> = (0..size).map(|i| (i as i32 / 2) * 3).collect();
    data.sort_unstable();

    let top = (size as i32 / 2) * 3 + 3;
    let targets = (0..size.max(1))
        .map(|_| rng.random_range(-3..top.max(1)))
        .collect();
    (data, targets)
}
