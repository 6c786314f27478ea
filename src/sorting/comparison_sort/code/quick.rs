//! Quick sort over a Lomuto partition.
//!
//! The pivot is always the last element of the range. That makes sorted and
//! reverse-sorted inputs quadratic, and keeps comparison counts reproducible.
//! Two labelled deviations live next to the reference:
//!
//! - [`quick_sort_iterative`] runs the identical partitions from an explicit
//!   work stack, always descending into the smaller side first, so auxiliary
//!   depth stays O(log n) even on adversarial input.
//! - [`quick_sort_median3`] moves the median of first/middle/last into the
//!   pivot slot before partitioning. Its counts differ from the reference.

use crate::counter::ComparisonCounter;
use crate::error::{check_range, AlgoError};

/// Lomuto partition of the whole slice around its last element.
///
/// Returns the final index of the pivot. Each `data[j] <= pivot` test is
/// counted; the closing pivot swap is not.
pub(crate) fn partition<T: PartialOrd + Copy>(
    data: &mut [T],
    counter: &mut ComparisonCounter,
) -> usize {
    let last = data.len() - 1;
    let pivot = data[last];
    // `store` is the slot right after the "<= pivot" block.
    let mut store = 0;
    for j in 0..last {
        if counter.le(&data[j], &pivot) {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, last);
    store
}

/// Recursive quick sort of the whole slice.
pub fn quick_sort<T: PartialOrd + Copy>(data: &mut [T], counter: &mut ComparisonCounter) {
    if data.len() <= 1 {
        return;
    }

    let pivot = partition(data, counter);
    let (left, right) = data.split_at_mut(pivot);
    quick_sort(left, counter);
    quick_sort(&mut right[1..], counter);
}

/// Quick sort restricted to the inclusive range `[lo, hi]`.
///
/// `lo >= hi` is the base case and leaves `data` untouched.
pub fn quick_sort_range<T: PartialOrd + Copy>(
    data: &mut [T],
    lo: usize,
    hi: usize,
    counter: &mut ComparisonCounter,
) -> Result<(), AlgoError> {
    check_range(lo, hi, data.len())?;
    if lo < hi {
        quick_sort(&mut data[lo..=hi], counter);
    }
    Ok(())
}

/// Quick sort with the same partitions as [`quick_sort`], driven by an explicit stack.
///
/// The larger side is deferred and the smaller side handled first, which
/// bounds the stack to O(log n) entries. Comparison counts match the
/// recursive version exactly because every partition call is the same.
pub fn quick_sort_iterative<T: PartialOrd + Copy>(
    data: &mut [T],
    counter: &mut ComparisonCounter,
) {
    // Half-open ranges still waiting to be partitioned.
    let mut pending: Vec<(usize, usize)> = Vec::new();
    let (mut start, mut end) = (0, data.len());

    loop {
        while end - start > 1 {
            let pivot = start + partition(&mut data[start..end], counter);
            let left = (start, pivot);
            let right = (pivot + 1, end);

            let (smaller, larger) = if left.1 - left.0 <= right.1 - right.0 {
                (left, right)
            } else {
                (right, left)
            };
            if larger.1 - larger.0 > 1 {
                pending.push(larger);
            }
            (start, end) = smaller;
        }

        match pending.pop() {
            Some(next) => (start, end) = next,
            None => break,
        }
    }
}

/// Quick sort choosing the median of the first, middle and last elements as pivot.
///
/// The (at most three) comparisons of the median selection are counted.
/// Not reproducible against the reference counts; use [`quick_sort`] for that.
pub fn quick_sort_median3<T: PartialOrd + Copy>(
    data: &mut [T],
    counter: &mut ComparisonCounter,
) {
    let len = data.len();
    if len <= 1 {
        return;
    }

    if len >= 3 {
        let median = median_of_three(data, 0, len / 2, len - 1, counter);
        data.swap(median, len - 1);
    }

    let pivot = partition(data, counter);
    let (left, right) = data.split_at_mut(pivot);
    quick_sort_median3(left, counter);
    quick_sort_median3(&mut right[1..], counter);
}

fn median_of_three<T: PartialOrd>(
    data: &[T],
    a: usize,
    b: usize,
    c: usize,
    counter: &mut ComparisonCounter,
) -> usize {
    if counter.lt(&data[a], &data[b]) {
        if counter.lt(&data[b], &data[c]) {
            b
        } else if counter.lt(&data[a], &data[c]) {
            c
        } else {
            a
        }
    } else if counter.lt(&data[a], &data[c]) {
        a
    } else if counter.lt(&data[b], &data[c]) {
        c
    } else {
        b
    }
}
