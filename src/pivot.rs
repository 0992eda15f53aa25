/// Median-of-three pivot selection for the closed interval `v[left..=right]`.
///
/// Orders `v[left]`, `v[center]` and `v[right]` with at most three conditional swaps so the
/// smallest ends at `left` and the largest at `right`, then moves the median to `right - 1`.
/// Returns the pivot position, always `right - 1`.
///
/// The two extremes are sentinels for [`partition_around_sentinels`]: the rightward scan stops at
/// `v[right] >= pivot` and the leftward scan at `v[left] <= pivot` at the latest. Swapping this
/// for another pivot strategy requires bounds checks in the scan.
///
/// Already sorted and reverse sorted input get a perfect split. Crafted inputs can still force a
/// quadratic sort, that is accepted.
///
/// [`partition_around_sentinels`]: crate::partition::partition_around_sentinels
pub fn median3_sentinels<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(left + 2 <= right && right < v.len());

    let center = left + (right - left) / 2;

    if is_less(&v[center], &v[left]) {
        v.swap(left, center);
    }

    // Largest of the three to the far right.
    if is_less(&v[right], &v[center]) {
        v.swap(center, right);
    }

    // Smallest of the three to the far left.
    if is_less(&v[center], &v[left]) {
        v.swap(left, center);
    }

    v.swap(center, right - 1);

    right - 1
}
