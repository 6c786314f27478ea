//! # Comparison Sorts
//!
//! Five classic sorts over a mutable integer sequence, each counting the
//! element comparisons it performs:
//!
//! | Variant   | Stable | Comparisons                                   |
//! |-----------|--------|-----------------------------------------------|
//! | bubble    | yes    | exactly `n(n-1)/2`                            |
//! | selection | no     | exactly `n(n-1)/2`                            |
//! | insertion | yes    | `n-1` (sorted) up to `n(n-1)/2` (descending)  |
//! | quick     | no     | `O(n log n)` average, `n(n-1)/2` on sorted input |
//! | merge     | yes    | between about `n·log2(n)/2` and `n·log2(n)`   |
//!
//! Callers reset a [`ComparisonCounter`](crate::counter::ComparisonCounter),
//! run one sort and read the counter back.

pub mod code;
pub mod test;

pub use code::*;

use crate::counter::ComparisonCounter;
use crate::registry::{AlgorithmRunner, RunSample, VariantClosure};
use crate::utils::data::{generate, InputPattern};
use log::warn;
use std::sync::Arc;

pub struct SortRunner;

impl AlgorithmRunner for SortRunner {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn description(&self) -> &'static str {
        "Bubble, selection, insertion, quick and merge sort with comparison counts"
    }

    fn category(&self) -> &'static str {
        "sorting"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(
        &'a self,
        size: usize,
        pattern: InputPattern,
        seed: u64,
    ) -> Vec<VariantClosure<'a>> {
        let input: Arc<Vec<i32>> = Arc::new(generate(pattern, size, seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let input = Arc::clone(&input);
                let func = v.function;
                let name = v.name;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let mut data = input.to_vec();
                        let mut counter = ComparisonCounter::new();
                        let (elapsed, outcome) = crate::measure!(func(&mut data, &mut counter));
                        if let Err(e) = outcome {
                            warn!("variant '{}' failed on {} elements: {}", name, data.len(), e);
                        }
                        RunSample {
                            elapsed,
                            comparisons: counter.read(),
                        }
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), String> {
        test::verify_all()
    }
}
