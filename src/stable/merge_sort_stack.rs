//! Top-down merge sort using an explicit task stack instead of recursion.
//!
//! Performs exactly the base cases and merges of `merge_sort_recursive`, in the same order.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::cutoff::Cutoff;
use crate::stable::schedule::{InPlaceSteps, MergeSteps, RecordedSteps};
use crate::work_stack::{ExplicitStack, Interval, WorkTask};

sort_impl!("merge_sort_stack");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
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

    trace!("merge_sort_stack: len {len} cutoff {}", cutoff.get());

    let mut steps = InPlaceSteps::new(v, &mut is_less);
    let max_pending = merge_sort(Interval::new(0, len - 1), cutoff, &mut steps);

    debug!("merge_sort_stack: len {len} max pending tasks {max_pending}");
}

/// Runs the steps for `interval` and returns the largest number of tasks pending at once.
fn merge_sort<S: MergeSteps>(interval: Interval, cutoff: Cutoff, steps: &mut S) -> usize {
    let mut stack = ExplicitStack::new();
    stack.push(WorkTask::Sort(interval));

    while let Some(task) = stack.pop() {
        match task {
            WorkTask::Sort(Interval { left, right }) if cutoff.is_base_case(left, right) => {
                steps.base_case(Interval { left, right });
            }
            WorkTask::Sort(interval) => {
                let Interval { left, right } = interval;
                let center = interval.center();

                // LIFO, so pushed in reverse: sort left, then sort right, then merge.
                stack.push(WorkTask::Merge {
                    left,
                    center,
                    right,
                });
                stack.push(WorkTask::Sort(Interval::new(center + 1, right)));
                stack.push(WorkTask::Sort(Interval::new(left, center)));
            }
            WorkTask::Merge {
                left,
                center,
                right,
            } => {
                steps.merge(left, center, right);
            }
        }
    }

    stack.high_water_mark()
}
