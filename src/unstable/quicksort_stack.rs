//! Non-recursive quicksort, pending intervals live on an explicit stack.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::cutoff::Cutoff;
use crate::partition::partition_around_sentinels;
use crate::pivot::median3_sentinels;
use crate::smallsort::insertion_sort_range;
use crate::work_stack::{ExplicitStack, Interval};

sort_impl!("quicksort_stack_median3");

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

    trace!("quicksort_stack: len {len} cutoff {}", cutoff.get());

    let max_pending = quicksort(v, cutoff, &mut is_less);

    debug!("quicksort_stack: len {len} max pending intervals {max_pending}");
}

/// Sorts `v` and returns the largest number of intervals that were pending at once.
fn quicksort<T, F>(v: &mut [T], cutoff: Cutoff, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut stack = ExplicitStack::new();
    stack.push(Interval::new(0, v.len() - 1));

    while let Some(Interval { left, right }) = stack.pop() {
        if cutoff.is_base_case(left, right) {
            insertion_sort_range(v, left, right, is_less);
            continue;
        }

        median3_sentinels(v, left, right, is_less);
        let pivot_pos = partition_around_sentinels(v, left, right, is_less);

        // Right half first, so the left half is popped next like in the recursive form.
        stack.push(Interval::new(pivot_pos + 1, right));
        stack.push(Interval::new(left, pivot_pos - 1));
    }

    stack.high_water_mark()
}
