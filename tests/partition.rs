use hybrid_sort_rs::partition::{partition_around_sentinels, PartitionImpl};
use hybrid_sort_rs::pivot::median3_sentinels;
use sort_test_tools::{instantiate_partition_tests, patterns};

instantiate_partition_tests!(PartitionImpl);

fn is_less(a: &i32, b: &i32) -> bool {
    a < b
}

#[test]
fn median3_orders_the_three_samples() {
    // left, center and right are 9, 5 and 1.
    let mut v = [9, 0, 0, 5, 0, 0, 1];
    let pivot_pos = median3_sentinels(&mut v, 0, 6, &mut is_less);

    assert_eq!(pivot_pos, 5);
    assert_eq!(v[0], 1);
    assert_eq!(v[5], 5);
    assert_eq!(v[6], 9);
    // The displaced element from right - 1 lands in the center.
    assert_eq!(v[3], 0);
}

#[test]
fn median3_every_order_of_three() {
    let orders = [
        [1, 2, 3],
        [1, 3, 2],
        [2, 1, 3],
        [2, 3, 1],
        [3, 1, 2],
        [3, 2, 1],
    ];

    for [a, b, c] in orders {
        let mut v = [a, 7, 7, b, 7, 7, c];
        let pivot_pos = median3_sentinels(&mut v, 0, 6, &mut is_less);

        assert_eq!((v[0], v[pivot_pos], v[6]), (1, 2, 3), "input {a} {b} {c}");
    }
}

#[test]
fn median3_within_interval() {
    let mut v = [100, 100, 8, 3, 4, 6, 2, 100, 100];
    let pivot_pos = median3_sentinels(&mut v, 2, 6, &mut is_less);

    assert_eq!(pivot_pos, 5);
    assert!(v[2] <= v[pivot_pos] && v[pivot_pos] <= v[6]);
    assert_eq!(&v[..2], &[100, 100]);
    assert_eq!(&v[7..], &[100, 100]);
}

#[test]
fn partition_leaves_outside_of_interval_untouched() {
    let mut v = patterns::random_uniform(64, 0..=20);
    let original = v.clone();
    let (left, right) = (10, 40);

    median3_sentinels(&mut v, left, right, &mut is_less);
    let pivot_pos = partition_around_sentinels(&mut v, left, right, &mut is_less);

    assert!(left < pivot_pos && pivot_pos < right);
    assert_eq!(&v[..left], &original[..left]);
    assert_eq!(&v[right + 1..], &original[right + 1..]);

    let pivot = v[pivot_pos];
    assert!(v[left..pivot_pos].iter().all(|&elem| elem <= pivot));
    assert!(v[pivot_pos + 1..=right].iter().all(|&elem| elem >= pivot));

    let mut before = original[left..=right].to_vec();
    let mut after = v[left..=right].to_vec();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn partition_all_equal_splits_in_the_middle() {
    // Equal elements stop both scans, so the cursors meet near the center.
    let mut v = vec![4; 101];
    let pivot_pos = hybrid_sort_rs::partition::partition(&mut v);

    assert!((40..=60).contains(&pivot_pos), "pivot_pos {pivot_pos}");
}

#[test]
#[should_panic]
fn partition_needs_three_elements() {
    hybrid_sort_rs::partition::partition(&mut [2, 1]);
}
