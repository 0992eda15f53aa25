use crate::pivot::median3_sentinels;

/// Takes the closed interval `v[left..=right]`, with the pivot at `right - 1` and the sentinels
/// placed by [`median3_sentinels`], and re-arranges it such that all elements before the returned
/// position are `<= pivot` and all elements after it are `>= pivot`. The pivot ends up at the
/// returned position.
///
/// Both cursors advance at least once per round, otherwise `v[i] == v[j] == pivot` would stall
/// the loop forever. Elements equal to the pivot stop both scans, which splits runs of equal
/// elements evenly.
///
/// If `is_less` does not implement a total order the sentinels may not stop the scans, in that
/// case indexing panics. All original elements will remain in `v`, same is true if `is_less`
/// panics.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition_around_sentinels<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot_pos = right - 1;
    let mut i = left;
    let mut j = pivot_pos;

    // Swaps happen strictly below `j <= pivot_pos - 1`, the pivot stays put until the end.
    loop {
        // Stops at `v[right]` at the latest.
        i += 1;
        while is_less(&v[i], &v[pivot_pos]) {
            i += 1;
        }

        // Stops at `v[left]` at the latest.
        j -= 1;
        while is_less(&v[pivot_pos], &v[j]) {
            j -= 1;
        }

        if i < j {
            v.swap(i, j);
        } else {
            break;
        }
    }

    v.swap(i, pivot_pos);

    i
}

/// Partitions the whole of `v` around its median-of-three pivot and returns the pivot position.
///
/// Panics if `v` has fewer than three elements.
pub fn partition<T: Ord>(v: &mut [T]) -> usize {
    partition_by(v, &mut |a: &T, b: &T| a.lt(b))
}

pub fn partition_by<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(len >= 3, "median-of-three partition needs three elements, got {len}");

    let right = len - 1;
    median3_sentinels(v, 0, right, is_less);
    partition_around_sentinels(v, 0, right, is_less)
}

pub struct PartitionImpl;

impl sort_test_tools::Partition for PartitionImpl {
    fn name() -> String {
        "partition_hoare_median3_sentinels".into()
    }

    fn partition<T>(arr: &mut [T]) -> usize
    where
        T: Ord,
    {
        partition(arr)
    }

    fn partition_by<T, F>(arr: &mut [T], is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        partition_by(arr, is_less)
    }
}
