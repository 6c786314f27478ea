//! Selection sort.

use crate::counter::ComparisonCounter;

/// Sort `data` ascending by selecting the minimum of the unsorted suffix.
///
/// The swap into position `i` happens on every outer iteration, even when the
/// minimum is already there. Comparison count is always `n * (n - 1) / 2`.
/// Not stable.
pub fn selection_sort<T: PartialOrd>(data: &mut [T], counter: &mut ComparisonCounter) {
    let len = data.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..len {
            if counter.lt(&data[j], &data[min]) {
                min = j;
            }
        }
        data.swap(i, min);
    }
}
