//! Tests for the binary search variants

use super::code::{available_variants, binary_search_iterative};
use crate::counter::ComparisonCounter;
use crate::utils::data::search_workload;

/// Verify every variant agrees with the iterative reference on index and
/// comparison count, and that every hit really holds the target.
pub fn verify_all() -> Result<(), String> {
    for size in [0usize, 1, 2, 7, 64, 1000] {
        let (data, targets) = search_workload(size, 0xb15ec7);

        for target in &targets {
            let mut reference_counter = ComparisonCounter::new();
            let expected = binary_search_iterative(&data, target, &mut reference_counter);

            if let Some(idx) = expected {
                if data[idx] != *target {
                    return Err(format!(
                        "iterative returned index {} holding {} for target {}",
                        idx, data[idx], target
                    ));
                }
            } else if data.contains(target) {
                return Err(format!(
                    "iterative missed target {} present in {} elements",
                    target, size
                ));
            }

            for variant in available_variants() {
                let mut counter = ComparisonCounter::new();
                let actual = (variant.function)(&data, target, &mut counter);
                if actual != expected || counter.read() != reference_counter.read() {
                    return Err(format!(
                        "Variant '{}' failed for target {} over {} elements: expected {:?} ({} comparisons), got {:?} ({} comparisons)",
                        variant.name,
                        target,
                        size,
                        expected,
                        reference_counter.read(),
                        actual,
                        counter.read()
                    ));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgoError;
    use crate::search::binary_search::code::*;

    const ODDS: [i32; 6] = [1, 3, 5, 7, 9, 11];

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should agree");
    }

    #[test]
    fn test_found_and_missing() {
        for variant in available_variants() {
            let mut counter = ComparisonCounter::new();
            assert_eq!((variant.function)(&ODDS, &7, &mut counter), Some(3), "{}", variant.name);
            assert_eq!((variant.function)(&ODDS, &4, &mut counter), None, "{}", variant.name);
            assert_eq!((variant.function)(&ODDS, &1, &mut counter), Some(0), "{}", variant.name);
            assert_eq!((variant.function)(&ODDS, &11, &mut counter), Some(5), "{}", variant.name);
            assert_eq!((variant.function)(&ODDS, &0, &mut counter), None, "{}", variant.name);
            assert_eq!((variant.function)(&ODDS, &12, &mut counter), None, "{}", variant.name);
        }
    }

    #[test]
    fn test_probe_counts() {
        // Probes 5 (idx 2), then 9 (idx 4), then 7 (idx 3).
        let mut counter = ComparisonCounter::new();
        binary_search_iterative(&ODDS, &7, &mut counter);
        assert_eq!(counter.read(), 3);

        counter.reset();
        binary_search_recursive(&ODDS, &7, &mut counter);
        assert_eq!(counter.read(), 3);
    }

    #[test]
    fn test_empty() {
        let empty: [i32; 0] = [];
        let mut counter = ComparisonCounter::new();
        assert_eq!(binary_search_iterative(&empty, &1, &mut counter), None);
        assert_eq!(binary_search_recursive(&empty, &1, &mut counter), None);
        assert_eq!(counter.read(), 0);
    }

    #[test]
    fn test_duplicates_return_bisection_hit() {
        let data = [2, 2, 2, 2, 2];
        let mut counter = ComparisonCounter::new();
        assert_eq!(binary_search_iterative(&data, &2, &mut counter), Some(2));
        assert_eq!(binary_search_recursive(&data, &2, &mut counter), Some(2));
    }

    #[test]
    fn test_ranges() {
        let mut counter = ComparisonCounter::new();
        assert_eq!(binary_search_iterative_in(&ODDS, 0, 2, &7, &mut counter), Ok(None));
        assert_eq!(binary_search_recursive_in(&ODDS, 3, 5, &7, &mut counter), Ok(Some(3)));
        assert_eq!(binary_search_recursive_in(&ODDS, 4, 3, &9, &mut counter), Ok(None));
        assert_eq!(
            binary_search_iterative_in(&ODDS, 0, 6, &9, &mut counter),
            Err(AlgoError::InvalidRange { lo: 0, hi: 6, len: 6 })
        );
    }

    #[test]
    fn test_unsorted_input_terminates() {
        let data = [9, 1, 8, 2, 7, 3];
        let mut counter = ComparisonCounter::new();
        for target in -1..11 {
            let a = binary_search_iterative(&data, &target, &mut counter);
            let b = binary_search_recursive(&data, &target, &mut counter);
            assert_eq!(a, b);
            if let Some(idx) = a {
                assert_eq!(data[idx], target);
            }
        }
    }
}
