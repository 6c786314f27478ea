//! Comparison sort implementations.
//!
//! This module contains every counted sort and the table that exposes them
//! as interchangeable variants.

mod bubble;
pub mod c_impl;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::bubble_sort;
pub use c_impl::C_IMPL_AVAILABLE;
pub use insertion::insertion_sort;
pub use merge::{merge, merge_sort, merge_sort_range};
pub use quick::{quick_sort, quick_sort_iterative, quick_sort_median3, quick_sort_range};
pub use selection::selection_sort;

use crate::counter::ComparisonCounter;
use crate::error::AlgoError;
use crate::utils::data::InputPattern;
use crate::utils::VariantInfo;

/// Type alias for the sort function signature shared by all variants
pub type SortFn = fn(&mut [i32], &mut ComparisonCounter) -> Result<(), AlgoError>;

/// Variants whose comparison counts follow the documented formulas exactly.
pub const REFERENCE_VARIANTS: [&str; 5] = ["bubble", "selection", "insertion", "quick", "merge"];

/// Get all available sort variants
pub fn available_variants() -> Vec<VariantInfo<SortFn>> {
    let mut variants: Vec<VariantInfo<SortFn>> = vec![
        VariantInfo {
            name: "bubble",
            description: "Bubble sort, full passes, n(n-1)/2 comparisons",
            function: |data, counter| {
                bubble_sort(data, counter);
                Ok(())
            },
        },
        VariantInfo {
            name: "selection",
            description: "Selection sort, n(n-1)/2 comparisons",
            function: |data, counter| {
                selection_sort(data, counter);
                Ok(())
            },
        },
        VariantInfo {
            name: "insertion",
            description: "Insertion sort, n-1 comparisons when already sorted",
            function: |data, counter| {
                insertion_sort(data, counter);
                Ok(())
            },
        },
        VariantInfo {
            name: "quick",
            description: "Recursive quick sort, Lomuto partition, last-element pivot",
            function: |data, counter| {
                quick_sort(data, counter);
                Ok(())
            },
        },
        VariantInfo {
            name: "quick_iterative",
            description: "Quick sort on an explicit stack, smaller side first",
            function: |data, counter| {
                quick_sort_iterative(data, counter);
                Ok(())
            },
        },
        VariantInfo {
            name: "quick_median3",
            description: "Quick sort with median-of-three pivot (counts not reproducible)",
            function: |data, counter| {
                quick_sort_median3(data, counter);
                Ok(())
            },
        },
        VariantInfo {
            name: "merge",
            description: "Top-down merge sort with a per-merge scratch buffer",
            function: merge_sort::<i32>,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-bubble",
            description: "C bubble sort",
            function: c_impl::bubble_sort_c,
        });
        variants.push(VariantInfo {
            name: "c-selection",
            description: "C selection sort",
            function: c_impl::selection_sort_c,
        });
        variants.push(VariantInfo {
            name: "c-insertion",
            description: "C insertion sort",
            function: c_impl::insertion_sort_c,
        });
        variants.push(VariantInfo {
            name: "c-quick",
            description: "C quick sort, Lomuto partition",
            function: c_impl::quick_sort_c,
        });
        variants.push(VariantInfo {
            name: "c-merge",
            description: "C merge sort",
            function: c_impl::merge_sort_c,
        });
    }

    variants
}

/// Variant whose comparison counts a given variant must reproduce exactly, if any.
///
/// `quick_iterative` and every `c-*` port mirror a reference variant;
/// `quick_median3` mirrors nothing.
pub fn count_reference(name: &str) -> Option<&'static str> {
    let base = name.strip_prefix("c-").unwrap_or(name);
    if base == "quick_iterative" {
        return Some("quick");
    }
    REFERENCE_VARIANTS.iter().copied().find(|&r| r == base)
}

/// Closed-form comparison count of a variant on `n` elements shaped like `pattern`, when one exists.
pub fn expected_comparisons(name: &str, pattern: InputPattern, n: u64) -> Option<u64> {
    let quadratic = n * n.saturating_sub(1) / 2;
    match (count_reference(name)?, pattern) {
        ("bubble" | "selection", _) => Some(quadratic),
        ("insertion", InputPattern::Sorted) => Some(n.saturating_sub(1)),
        ("insertion", InputPattern::Reversed) => Some(quadratic),
        ("quick", InputPattern::Sorted | InputPattern::Reversed) => Some(quadratic),
        _ => None,
    }
}
