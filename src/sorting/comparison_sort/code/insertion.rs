//! Insertion sort.

use crate::counter::ComparisonCounter;

/// Sort `data` ascending by shifting each key left past strictly greater predecessors.
///
/// One comparison per shift attempt, including the one that stops the shift
/// (skipped only when the key reaches index 0). Already sorted input costs
/// `n - 1` comparisons, strictly descending input `n * (n - 1) / 2`. Stable.
pub fn insertion_sort<T: PartialOrd + Copy>(data: &mut [T], counter: &mut ComparisonCounter) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && counter.gt(&data[j - 1], &key) {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}
