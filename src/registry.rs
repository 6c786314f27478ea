//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! Sorting and searching families register here so the CLI and the
//! verification test can drive every variant without knowing about them.

use crate::utils::bench::Measurement;
use crate::utils::data::InputPattern;
use crate::utils::timer::VariantResult;
use log::debug;

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// What one run of a variant observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSample {
    /// Time (or cycles) spent inside the algorithm
    pub elapsed: Measurement,
    /// Comparisons counted during the run
    pub comparisons: u64,
}

/// A closure that runs one iteration of a variant on a fresh copy of its input
pub struct VariantClosure<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Timing happens inside the closure to eliminate Fn trait overhead.
    pub run: Box<dyn FnMut() -> RunSample + 'a>,
}

/// Trait that all algorithm families must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm family (e.g., "sort")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "sorting", "search")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant over an input of `size` elements.
    /// Each closure does ONE execution and reports time and comparisons.
    /// The runner handles warmup, scheduling, and repetition.
    fn get_variant_closures<'a>(
        &'a self,
        size: usize,
        pattern: InputPattern,
        seed: u64,
    ) -> Vec<VariantClosure<'a>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), String>;
}

/// Registry of all algorithm families
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        debug!("registering algorithm '{}' [{}]", algo.name(), algo.category());
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// List algorithms by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::sorting::comparison_sort::SortRunner);
    registry.register(crate::search::binary_search::BinarySearchRunner);

    registry
}
