//! Searching sorted sequences.

pub mod binary_search;
