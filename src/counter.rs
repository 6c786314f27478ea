//! Comparison instrumentation.
//!
//! Every sort and search takes a `&mut ComparisonCounter` and bumps it once per
//! element-vs-element relational test. Moves and swaps are never counted.
//! The counter is never reset by an algorithm: a measurement session is
//! `reset` -> run -> `read`, driven by the caller.

use std::cmp::Ordering;

/// Counts element comparisons for one measurement session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonCounter {
    count: u64,
}

impl ComparisonCounter {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Start a new session.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    #[inline(always)]
    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Fold in a count reported by an implementation that counts on its own
    /// (the C reference variants).
    pub fn add(&mut self, comparisons: u64) {
        self.count += comparisons;
    }

    pub fn read(&self) -> u64 {
        self.count
    }

    /// Counted `a < b`.
    #[inline(always)]
    pub fn lt<T: PartialOrd>(&mut self, a: &T, b: &T) -> bool {
        self.increment();
        a < b
    }

    /// Counted `a > b`.
    #[inline(always)]
    pub fn gt<T: PartialOrd>(&mut self, a: &T, b: &T) -> bool {
        self.increment();
        a > b
    }

    /// Counted `a <= b`.
    #[inline(always)]
    pub fn le<T: PartialOrd>(&mut self, a: &T, b: &T) -> bool {
        self.increment();
        a <= b
    }

    /// Counted three-way comparison, one increment per call.
    #[inline(always)]
    pub fn compare<T: Ord>(&mut self, a: &T, b: &T) -> Ordering {
        self.increment();
        a.cmp(b)
    }
}
