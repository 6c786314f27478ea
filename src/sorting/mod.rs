//! Comparison-based sorting algorithms.

pub mod comparison_sort;
