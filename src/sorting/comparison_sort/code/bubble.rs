//! Bubble sort without the early-exit optimisation.

use crate::counter::ComparisonCounter;

/// Sort `data` ascending by repeatedly swapping out-of-order neighbours.
///
/// Every pass scans the whole unsorted prefix, so the comparison count is
/// always `n * (n - 1) / 2` regardless of the input. Stable.
///
/// # Example
/// ```
/// use linear_algo::counter::ComparisonCounter;
/// use linear_algo::sorting::comparison_sort::bubble_sort;
///
/// let mut data = [5, 3, 8, 1, 9, 2];
/// let mut counter = ComparisonCounter::new();
/// bubble_sort(&mut data, &mut counter);
/// assert_eq!(data, [1, 2, 3, 5, 8, 9]);
/// assert_eq!(counter.read(), 15);
/// ```
pub fn bubble_sort<T: PartialOrd>(data: &mut [T], counter: &mut ComparisonCounter) {
    let len = data.len();
    for pass in 0..len.saturating_sub(1) {
        for j in 0..len - pass - 1 {
            if counter.gt(&data[j], &data[j + 1]) {
                data.swap(j, j + 1);
            }
        }
    }
}
