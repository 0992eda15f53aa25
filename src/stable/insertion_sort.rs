//! Plain insertion sort over the whole slice, the base case of every other engine.

use std::cmp::Ordering;

use log::trace;

use crate::cutoff::Cutoff;
use crate::smallsort::insertion_sort_range;

// Quadratic, larger inputs only slow the generated tests down.
sort_impl!("insertion_sort", max_test_len = 2_048);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Same as [`sort`], there is nothing to hand off to so the cutoff has no effect.
#[inline]
pub fn sort_with_cutoff<T>(v: &mut [T], cutoff: impl Into<Cutoff>)
where
    T: Ord,
{
    let _: Cutoff = cutoff.into();
    sort(v);
}

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    trace!("insertion_sort: len {len}");

    insertion_sort_range(v, 0, len - 1, &mut is_less);
}
