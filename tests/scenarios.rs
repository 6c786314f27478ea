//! End-to-end walkthroughs: reset the counter, run one algorithm, read it back.

use linear_algo::prelude::*;
use linear_algo::search::binary_search::{binary_search_iterative_in, binary_search_recursive_in};
use linear_algo::sorting::comparison_sort::{
    available_variants, merge_sort_range, quick_sort_iterative, quick_sort_range,
};

#[test]
fn bubble_sort_six_elements() {
    let mut data = vec![5, 3, 8, 1, 9, 2];
    let mut counter = ComparisonCounter::new();
    counter.reset();
    bubble_sort(&mut data, &mut counter);
    assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
    assert_eq!(counter.read(), 15);
}

#[test]
fn insertion_sort_sorted_input() {
    let mut data = vec![1, 2, 3, 4, 5];
    let mut counter = ComparisonCounter::new();
    insertion_sort(&mut data, &mut counter);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
    assert_eq!(counter.read(), 4);
}

#[test]
fn quick_sort_descending_five() {
    // Pivot 5 is compared against 9, 8, 7, 6 and lands at index 0; the
    // remaining partitions cost 3 + 2 + 1.
    let mut data = vec![9, 8, 7, 6, 5];
    let mut counter = ComparisonCounter::new();
    quick_sort(&mut data, &mut counter);
    assert_eq!(data, vec![5, 6, 7, 8, 9]);
    assert_eq!(counter.read(), 10);
}

#[test]
fn binary_search_odd_numbers() {
    let data = [1, 3, 5, 7, 9, 11];
    let mut counter = ComparisonCounter::new();

    assert_eq!(binary_search_iterative(&data, &7, &mut counter), Some(3));
    assert_eq!(binary_search_recursive(&data, &7, &mut counter), Some(3));
    assert_eq!(binary_search_iterative(&data, &4, &mut counter), None);
    assert_eq!(binary_search_recursive(&data, &4, &mut counter), None);
}

#[test]
fn empty_input_everywhere() {
    for variant in available_variants() {
        let mut data: Vec<i32> = Vec::new();
        let mut counter = ComparisonCounter::new();
        (variant.function)(&mut data, &mut counter).unwrap();
        assert!(data.is_empty());
        assert_eq!(counter.read(), 0, "{}", variant.name);
    }

    let mut counter = ComparisonCounter::new();
    let empty: [i32; 0] = [];
    assert_eq!(binary_search_iterative(&empty, &3, &mut counter), None);
    assert_eq!(binary_search_recursive(&empty, &3, &mut counter), None);
    assert_eq!(binary_search_iterative_in(&empty, 1, 0, &3, &mut counter), Ok(None));
    assert_eq!(binary_search_recursive_in(&empty, 1, 0, &3, &mut counter), Ok(None));
    assert_eq!(counter.read(), 0);
}

#[test]
fn range_entry_points_validate_bounds() {
    let mut data = [3, 2, 1];
    let mut counter = ComparisonCounter::new();
    assert!(matches!(
        quick_sort_range(&mut data, 0, 3, &mut counter),
        Err(AlgoError::InvalidRange { lo: 0, hi: 3, len: 3 })
    ));
    assert!(matches!(
        merge_sort_range(&mut data, 1, 7, &mut counter),
        Err(AlgoError::InvalidRange { .. })
    ));
    assert_eq!(data, [3, 2, 1]);
}

#[test]
fn iterative_quick_sort_survives_deep_worst_case() {
    let mut data: Vec<i32> = (0..5_000).rev().collect();
    let mut counter = ComparisonCounter::new();
    quick_sort_iterative(&mut data, &mut counter);
    assert!(data.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(counter.read(), 5_000 * 4_999 / 2);
}

#[test]
fn containers_feed_the_engine() {
    let mut fixed: FixedArray<8> = FixedArray::new();
    let mut growable = GrowableArray::with_capacity(1).unwrap();
    let mut list = LinkedList::new();
    for v in [4, -2, 7, 0, 7] {
        fixed.push(v).unwrap();
        growable.push(v).unwrap();
        list.push_back(v);
    }

    let merge = available_variants()
        .into_iter()
        .find(|v| v.name == "merge")
        .unwrap()
        .function;

    let mut counter = ComparisonCounter::new();
    fixed.sort_with(merge, &mut counter).unwrap();
    let fixed_count = counter.read();

    counter.reset();
    growable.sort_with(merge, &mut counter).unwrap();
    assert_eq!(counter.read(), fixed_count);

    counter.reset();
    list.sort_staged(merge, &mut counter).unwrap();
    assert_eq!(counter.read(), fixed_count);

    assert_eq!(fixed.as_slice(), &[-2, 0, 4, 7, 7]);
    assert_eq!(growable.as_slice(), fixed.as_slice());
    assert_eq!(list.to_vec(), fixed.as_slice());

    counter.reset();
    let hit = binary_search_iterative(growable.as_slice(), &4, &mut counter);
    assert_eq!(hit, Some(2));
}
