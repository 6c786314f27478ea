//! Array that doubles its capacity when full.

use super::{remove_shifting, write_values, ContiguousSequence};
use crate::error::AlgoError;
use log::trace;
use std::fmt;

/// Heap-backed array with an explicit, doubling capacity.
///
/// Growth reserves fallibly, so running out of memory surfaces as
/// [`AlgoError::AllocationFailure`] instead of aborting the process.
#[derive(Clone, Default)]
pub struct GrowableArray {
    values: Vec<i32>,
    capacity: usize,
}

impl GrowableArray {
    /// Create an empty array able to hold `initial` elements before growing.
    ///
    /// A zero capacity is raised to one so doubling always makes progress.
    pub fn with_capacity(initial: usize) -> Result<Self, AlgoError> {
        let capacity = initial.max(1);
        let mut values = Vec::new();
        values
            .try_reserve_exact(capacity)
            .map_err(|_| AlgoError::AllocationFailure { requested: capacity })?;
        Ok(Self { values, capacity })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn grow_if_full(&mut self) -> Result<(), AlgoError> {
        if self.values.len() < self.capacity {
            return Ok(());
        }
        let doubled = self.capacity.max(1).saturating_mul(2);
        self.values
            .try_reserve_exact(doubled - self.values.len())
            .map_err(|_| AlgoError::AllocationFailure { requested: doubled })?;
        trace!("growable array: capacity {} -> {}", self.capacity, doubled);
        self.capacity = doubled;
        Ok(())
    }

    /// Append `value`, doubling the capacity first if the array is full.
    pub fn push(&mut self, value: i32) -> Result<(), AlgoError> {
        self.grow_if_full()?;
        self.values.push(value);
        Ok(())
    }

    /// Remove the element at `pos`, shifting the tail left.
    pub fn remove_at(&mut self, pos: usize) -> Result<i32, AlgoError> {
        let len = self.values.len();
        let removed = remove_shifting(&mut self.values, len, pos)?;
        self.values.truncate(len - 1);
        Ok(removed)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.values.iter()
    }

    /// Drop every element and release the storage.
    pub fn clear(&mut self) {
        self.values = Vec::new();
        self.capacity = 0;
    }
}

impl ContiguousSequence for GrowableArray {
    fn as_slice(&self) -> &[i32] {
        &self.values
    }

    fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.values
    }
}

impl fmt::Display for GrowableArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.iter())
    }
}

impl fmt::Debug for GrowableArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("capacity", &self.capacity)
            .field("values", &self.values)
            .finish()
    }
}
