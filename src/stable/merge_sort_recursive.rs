//! Recursive top-down merge sort with insertion sort below the cutoff.

use std::cmp::Ordering;

use log::trace;

use crate::cutoff::Cutoff;
use crate::stable::schedule::{InPlaceSteps, MergeSteps, RecordedSteps};
use crate::work_stack::{Interval, WorkTask};

sort_impl!("merge_sort_recursive");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
/// It allocates a scratch buffer the size of `v` once and reuses it for every merge.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with_cutoff(v, Cutoff::default());
}

/// Sorts the slice with a comparator function.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified. Equal elements keep their
/// relative order.
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
    stable_sort(v, cutoff.into(), |a, b| a.lt(b));
}

#[inline]
pub fn sort_by_with_cutoff<T, F>(v: &mut [T], cutoff: impl Into<Cutoff>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, cutoff.into(), |a, b| compare(a, b) == Ordering::Less);
}

/// Base cases and merges performed when sorting a slice of length `len`, in execution order.
pub fn schedule(len: usize, cutoff: impl Into<Cutoff>) -> Vec<WorkTask> {
    let mut recorded = RecordedSteps::default();
    if len >= 2 {
        merge_sort(Interval::new(0, len - 1), cutoff.into(), &mut recorded);
    }

    recorded.steps
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn stable_sort<T, F>(v: &mut [T], cutoff: Cutoff, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    trace!("merge_sort_recursive: len {len} cutoff {}", cutoff.get());

    let mut steps = InPlaceSteps::new(v, &mut is_less);
    merge_sort(Interval::new(0, len - 1), cutoff, &mut steps);
}

fn merge_sort<S: MergeSteps>(interval: Interval, cutoff: Cutoff, steps: &mut S) {
    let Interval { left, right } = interval;

    if cutoff.is_base_case(left, right) {
        steps.base_case(interval);
        return;
    }

    let center = interval.center();
    merge_sort(Interval::new(left, center), cutoff, steps);
    merge_sort(Interval::new(center + 1, right), cutoff, steps);
    steps.merge(left, center, right);
}
