//! Linear containers that feed the sorting and searching engine.
//!
//! The two array containers expose contiguous storage through
//! [`ContiguousSequence`], so any sort or search runs on them directly.
//! [`LinkedList`] has no O(1) indexing and stages its values into a buffer
//! instead.

pub mod fixed_array;
pub mod growable_array;
pub mod linked_list;

pub use fixed_array::{FixedArray, DEFAULT_CAPACITY};
pub use growable_array::GrowableArray;
pub use linked_list::LinkedList;

use crate::counter::ComparisonCounter;
use crate::error::AlgoError;
use crate::sorting::comparison_sort::SortFn;
use std::fmt;

/// Storage with O(1) indexed reads and writes over a known length.
pub trait ContiguousSequence {
    fn as_slice(&self) -> &[i32];

    fn as_mut_slice(&mut self) -> &mut [i32];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the first element equal to `value`, scanning from the front.
    fn find(&self, value: i32) -> Option<usize> {
        self.as_slice().iter().position(|&v| v == value)
    }

    /// Run a counted sort over the stored elements.
    fn sort_with(&mut self, sort: SortFn, counter: &mut ComparisonCounter) -> Result<(), AlgoError> {
        sort(self.as_mut_slice(), counter)
    }
}

/// Write values as `[ 1 2 3 ]`.
pub(crate) fn write_values<'a>(
    f: &mut fmt::Formatter<'_>,
    values: impl IntoIterator<Item = &'a i32>,
) -> fmt::Result {
    f.write_str("[ ")?;
    for value in values {
        write!(f, "{} ", value)?;
    }
    f.write_str("]")
}

/// Shift `slots[pos + 1..len]` one place left and return the removed value.
pub(crate) fn remove_shifting(slots: &mut [i32], len: usize, pos: usize) -> Result<i32, AlgoError> {
    if pos >= len {
        return Err(AlgoError::IndexOutOfBounds { index: pos, len });
    }
    let removed = slots[pos];
    slots.copy_within(pos + 1..len, pos);
    Ok(removed)
}
