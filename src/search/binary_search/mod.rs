//! # Binary Search
//!
//! Iterative and recursive bisection over an ascending sequence. Both
//! variants probe `mid = lo + (hi - lo) / 2`, count one comparison per probe
//! and must agree on the returned index and on the comparison count.

pub mod code;
pub mod test;

pub use code::*;

use crate::counter::ComparisonCounter;
use crate::registry::{AlgorithmRunner, RunSample, VariantClosure};
use crate::utils::data::{search_workload, InputPattern};
use std::sync::Arc;

pub struct BinarySearchRunner;

impl AlgorithmRunner for BinarySearchRunner {
    fn name(&self) -> &'static str {
        "binary_search"
    }

    fn description(&self) -> &'static str {
        "Iterative and recursive binary search over a sorted sequence"
    }

    fn category(&self) -> &'static str {
        "search"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    /// Binary search needs sorted input, so `pattern` is ignored; the
    /// workload is a sorted sequence with duplicates and a batch of
    /// present and absent targets.
    fn get_variant_closures<'a>(
        &'a self,
        size: usize,
        _pattern: InputPattern,
        seed: u64,
    ) -> Vec<VariantClosure<'a>> {
        let workload = Arc::new(search_workload(size, seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let workload = Arc::clone(&workload);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (data, targets) = workload.as_ref();
                        let mut counter = ComparisonCounter::new();
                        let (elapsed, _) = crate::measure!({
                            let mut found = 0usize;
                            for target in targets {
                                if std::hint::black_box(func(data, target, &mut counter)).is_some() {
                                    found += 1;
                                }
                            }
                            found
                        });
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
