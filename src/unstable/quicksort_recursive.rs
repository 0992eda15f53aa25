//! Recursive quicksort with median-of-three pivot and insertion sort below the cutoff.

use std::cmp::Ordering;

use log::trace;

use crate::cutoff::Cutoff;
use crate::partition::partition_around_sentinels;
use crate::pivot::median3_sentinels;
use crate::smallsort::insertion_sort_range;

sort_impl!("quicksort_recursive_median3");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with_cutoff(v, Cutoff::default());
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_cutoff(v, Cutoff::default(), compare);
}

#[inline]
pub fn sort_with_cutoff<T>(v: &mut [T], cutoff: impl Into<Cutoff>)
where
    T: Ord,
{
    unstable_sort(v, cutoff.into(), |a, b| a.lt(b));
}

#[inline]
pub fn sort_by_with_cutoff<T, F>(v: &mut [T], cutoff: impl Into<Cutoff>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, cutoff.into(), |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], cutoff: Cutoff, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    trace!("quicksort_recursive: len {len} cutoff {}", cutoff.get());

    quicksort(v, 0, len - 1, cutoff, &mut is_less);
}

/// Sorts the closed interval `v[left..=right]`.
///
/// Recursion depth follows the partition balance, it is linear in the worst case. See
/// `quicksort_stack` for the variant that keeps pending intervals on the heap.
fn quicksort<T, F>(v: &mut [T], left: usize, right: usize, cutoff: Cutoff, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if cutoff.is_base_case(left, right) {
        insertion_sort_range(v, left, right, is_less);
        return;
    }

    median3_sentinels(v, left, right, is_less);
    let pivot_pos = partition_around_sentinels(v, left, right, is_less);

    // `left < pivot_pos < right` thanks to the sentinels, neither side is empty.
    quicksort(v, left, pivot_pos - 1, cutoff, is_less);
    quicksort(v, pivot_pos + 1, right, cutoff, is_less);
}
