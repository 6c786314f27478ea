//! Bounded array with a compile-time capacity.

use super::{remove_shifting, write_values, ContiguousSequence};
use crate::error::AlgoError;
use std::fmt;

/// Capacity used when none is named.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Array of at most `CAP` integers stored inline.
///
/// Inserting into a full array is an explicit [`AlgoError::CapacityExceeded`]
/// rather than a silently dropped value.
#[derive(Clone)]
pub struct FixedArray<const CAP: usize = DEFAULT_CAPACITY> {
    slots: [i32; CAP],
    len: usize,
}

impl<const CAP: usize> FixedArray<CAP> {
    pub fn new() -> Self {
        Self {
            slots: [0; CAP],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        CAP
    }

    pub fn is_full(&self) -> bool {
        self.len == CAP
    }

    /// Append `value` at the end.
    pub fn push(&mut self, value: i32) -> Result<(), AlgoError> {
        if self.is_full() {
            return Err(AlgoError::CapacityExceeded { capacity: CAP });
        }
        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove the element at `pos`, shifting the tail left.
    pub fn remove_at(&mut self, pos: usize) -> Result<i32, AlgoError> {
        let removed = remove_shifting(&mut self.slots, self.len, pos)?;
        self.len -= 1;
        Ok(removed)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }
}

impl<const CAP: usize> Default for FixedArray<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> ContiguousSequence for FixedArray<CAP> {
    fn as_slice(&self) -> &[i32] {
        &self.slots[..self.len]
    }

    fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.slots[..self.len]
    }
}

impl<const CAP: usize> fmt::Display for FixedArray<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.iter())
    }
}

impl<const CAP: usize> fmt::Debug for FixedArray<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("capacity", &CAP)
            .field("values", &self.as_slice())
            .finish()
    }
}
