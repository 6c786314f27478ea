//! Binary search implementations.

mod iterative;
mod recursive;

pub use iterative::{binary_search_iterative, binary_search_iterative_in};
pub use recursive::{binary_search_recursive, binary_search_recursive_in};

use crate::counter::ComparisonCounter;
use crate::utils::VariantInfo;

/// Type alias for the search function signature
pub type SearchFn = fn(&[i32], &i32, &mut ComparisonCounter) -> Option<usize>;

/// Get all available search variants
pub fn available_variants() -> Vec<VariantInfo<SearchFn>> {
    vec![
        VariantInfo {
            name: "iterative",
            description: "Loop over a shrinking [lo, hi] window",
            function: binary_search_iterative::<i32>,
        },
        VariantInfo {
            name: "recursive",
            description: "Tail recursion over a shrinking [lo, hi] window",
            function: binary_search_recursive::<i32>,
        },
    ]
}
