//! Verification and tests for the comparison sorts.

use super::code::{available_variants, count_reference, SortFn};
use crate::counter::ComparisonCounter;
use crate::utils::data::{generate, InputPattern};
use log::debug;
use std::collections::HashMap;

fn run_counted(func: SortFn, input: &[i32]) -> Result<(Vec<i32>, u64), String> {
    let mut data = input.to_vec();
    let mut counter = ComparisonCounter::new();
    func(&mut data, &mut counter).map_err(|e| e.to_string())?;
    Ok((data, counter.read()))
}

fn verification_inputs() -> Vec<(String, Vec<i32>)> {
    let mut inputs = vec![
        ("empty".to_string(), Vec::new()),
        ("single".to_string(), vec![42]),
        ("pair".to_string(), vec![2, 1]),
        ("duplicates".to_string(), vec![3, 1, 3, 1, 2, 2, 3]),
        ("extremes".to_string(), vec![i32::MAX, 0, i32::MIN, -1, i32::MAX]),
    ];
    for pattern in InputPattern::ALL {
        for size in [7, 64, 257] {
            inputs.push((format!("{}/{}", pattern, size), generate(pattern, size, 0x5eed)));
        }
    }
    inputs
}

/// Verify every variant sorts correctly and reproduces the comparison count of
/// the reference variant it mirrors.
pub fn verify_all() -> Result<(), String> {
    let variants = available_variants();

    for (label, input) in verification_inputs() {
        let mut expected = input.clone();
        expected.sort();

        let mut counts: HashMap<&'static str, u64> = HashMap::new();
        for variant in &variants {
            let (output, comparisons) = run_counted(variant.function, &input)
                .map_err(|e| format!("Variant '{}' failed on {}: {}", variant.name, label, e))?;
            if output != expected {
                return Err(format!(
                    "Variant '{}' produced unsorted output on {}: {:?}",
                    variant.name, label, output
                ));
            }
            counts.insert(variant.name, comparisons);
        }

        for variant in &variants {
            let Some(reference) = count_reference(variant.name) else {
                continue;
            };
            let (actual, wanted) = (counts[variant.name], counts[reference]);
            if actual != wanted {
                return Err(format!(
                    "Variant '{}' counted {} comparisons on {}, '{}' counted {}",
                    variant.name, actual, label, reference, wanted
                ));
            }
        }

        let n = input.len() as u64;
        let quadratic = n * n.saturating_sub(1) / 2;
        for name in ["bubble", "selection"] {
            if counts[name] != quadratic {
                return Err(format!(
                    "Variant '{}' counted {} comparisons on {}, expected n(n-1)/2 = {}",
                    name, counts[name], label, quadratic
                ));
            }
        }
        debug!("sort variants agree on {} ({} elements)", label, n);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::comparison_sort::code::*;

    fn quadratic(n: u64) -> u64 {
        n * n.saturating_sub(1) / 2
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should sort and count consistently");
    }

    #[test]
    fn test_bubble_example() {
        let mut data = [5, 3, 8, 1, 9, 2];
        let mut counter = ComparisonCounter::new();
        bubble_sort(&mut data, &mut counter);
        assert_eq!(data, [1, 2, 3, 5, 8, 9]);
        assert_eq!(counter.read(), 15);
    }

    #[test]
    fn test_selection_count_is_input_independent() {
        for pattern in InputPattern::ALL {
            let mut data = generate(pattern, 40, 9);
            let mut counter = ComparisonCounter::new();
            selection_sort(&mut data, &mut counter);
            assert_eq!(counter.read(), quadratic(40), "pattern {}", pattern);
        }
    }

    #[test]
    fn test_insertion_best_and_worst_case() {
        let mut data = [1, 2, 3, 4, 5];
        let mut counter = ComparisonCounter::new();
        insertion_sort(&mut data, &mut counter);
        assert_eq!(data, [1, 2, 3, 4, 5]);
        assert_eq!(counter.read(), 4);

        let mut data: Vec<i32> = (0..30).rev().collect();
        counter.reset();
        insertion_sort(&mut data, &mut counter);
        assert_eq!(counter.read(), quadratic(30));
    }

    #[test]
    fn test_insertion_equal_keys_stop_shift() {
        let mut data = [2, 2, 2];
        let mut counter = ComparisonCounter::new();
        insertion_sort(&mut data, &mut counter);
        assert_eq!(counter.read(), 2);
    }

    #[test]
    fn test_quick_reverse_example() {
        let mut data = [9, 8, 7, 6, 5];
        let mut counter = ComparisonCounter::new();
        quick_sort(&mut data, &mut counter);
        assert_eq!(data, [5, 6, 7, 8, 9]);
        // 4 at the top level (pivot 5), then [8, 7, 6, 9]: 3, [8, 7, 6]: 2, [7, 8]: 1
        assert_eq!(counter.read(), 10);
    }

    #[test]
    fn test_quick_sorted_input_is_quadratic() {
        let mut data: Vec<i32> = (0..100).collect();
        let mut counter = ComparisonCounter::new();
        quick_sort(&mut data, &mut counter);
        assert_eq!(counter.read(), quadratic(100));
    }

    #[test]
    fn test_quick_range() {
        let mut data = [4, 9, 8, 7, 0];
        let mut counter = ComparisonCounter::new();
        quick_sort_range(&mut data, 1, 3, &mut counter).unwrap();
        assert_eq!(data, [4, 7, 8, 9, 0]);

        counter.reset();
        quick_sort_range(&mut data, 3, 1, &mut counter).unwrap();
        assert_eq!(counter.read(), 0);
        assert!(quick_sort_range(&mut data, 2, 5, &mut counter).is_err());
    }

    #[test]
    fn test_merge_count_bounds() {
        let n = 256u64;
        let log = 8u64;
        for pattern in InputPattern::ALL {
            let mut data = generate(pattern, n as usize, 11);
            let mut counter = ComparisonCounter::new();
            merge_sort(&mut data, &mut counter).unwrap();
            let count = counter.read();
            assert!(count >= n * log / 2, "{}: {} too few", pattern, count);
            assert!(count <= n * log, "{}: {} too many", pattern, count);
        }
    }

    #[test]
    fn test_empty_costs_nothing() {
        for variant in available_variants() {
            let mut data: [i32; 0] = [];
            let mut counter = ComparisonCounter::new();
            (variant.function)(&mut data, &mut counter).unwrap();
            assert_eq!(counter.read(), 0, "{}", variant.name);
        }
    }

    #[test]
    fn test_counter_accumulates_across_runs() {
        let mut counter = ComparisonCounter::new();
        bubble_sort(&mut [3, 2, 1], &mut counter);
        bubble_sort(&mut [3, 2, 1], &mut counter);
        assert_eq!(counter.read(), 6);
    }

    #[test]
    fn test_count_reference_mapping() {
        assert_eq!(count_reference("quick_iterative"), Some("quick"));
        assert_eq!(count_reference("c-merge"), Some("merge"));
        assert_eq!(count_reference("merge"), Some("merge"));
        assert_eq!(count_reference("quick_median3"), None);
    }

    #[test]
    fn test_closed_forms_match_measured_counts() {
        for variant in available_variants() {
            for pattern in InputPattern::ALL {
                for n in [0usize, 1, 2, 9, 50] {
                    let Some(expected) = expected_comparisons(variant.name, pattern, n as u64)
                    else {
                        continue;
                    };
                    let mut data = generate(pattern, n, 3);
                    let mut counter = ComparisonCounter::new();
                    (variant.function)(&mut data, &mut counter).unwrap();
                    assert_eq!(
                        counter.read(),
                        expected,
                        "{} on {} x {}",
                        variant.name,
                        pattern,
                        n
                    );
                }
            }
        }
    }
}
