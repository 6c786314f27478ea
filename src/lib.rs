//! # Linear-Algo
//!
//! Linear containers and comparison-based sorting/search algorithms,
//! instrumented to count element comparisons for empirical complexity study.
//!
//! ```
//! use linear_algo::prelude::*;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! let mut counter = ComparisonCounter::new();
//! bubble_sort(&mut data, &mut counter);
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//! assert_eq!(counter.read(), 15);
//! ```

pub mod containers;
pub mod counter;
pub mod error;
pub mod registry;
pub mod search;
pub mod sorting;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_benchmarks from utils::runner
pub use utils::runner::run_benchmarks;

pub use counter::ComparisonCounter;
pub use error::AlgoError;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::containers::{ContiguousSequence, FixedArray, GrowableArray, LinkedList};
    pub use crate::counter::ComparisonCounter;
    pub use crate::error::AlgoError;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::search::binary_search::{binary_search_iterative, binary_search_recursive};
    pub use crate::sorting::comparison_sort::{
        bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
    };
}
