//! The steps of top-down merge sort, separated from the slice they run on.
//!
//! Both merge sort variants only decide *when* an interval is insertion sorted and *when* two
//! runs are merged. Routing those decisions through [`MergeSteps`] lets the same driver either
//! sort a slice or record its schedule, which is how the two variants are checked against each
//! other.

use crate::merge::{merge, ScratchBuffer};
use crate::smallsort::insertion_sort_range;
use crate::work_stack::{Interval, WorkTask};

/// Receives the steps of a top-down merge sort in execution order.
pub trait MergeSteps {
    /// The interval is below the cutoff and gets insertion sorted.
    fn base_case(&mut self, interval: Interval);

    /// The runs `[left, center]` and `[center + 1, right]` are sorted and get merged.
    fn merge(&mut self, left: usize, center: usize, right: usize);
}

/// Runs the steps on a slice, sharing one scratch buffer between all merges.
pub(crate) struct InPlaceSteps<'a, T, F> {
    v: &'a mut [T],
    scratch: ScratchBuffer<T>,
    is_less: &'a mut F,
}

impl<'a, T, F> InPlaceSteps<'a, T, F> {
    pub(crate) fn new(v: &'a mut [T], is_less: &'a mut F) -> Self {
        let scratch = ScratchBuffer::new(v.len());
        Self {
            v,
            scratch,
            is_less,
        }
    }
}

impl<T, F> MergeSteps for InPlaceSteps<'_, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    #[inline]
    fn base_case(&mut self, interval: Interval) {
        insertion_sort_range(
            &mut *self.v,
            interval.left,
            interval.right,
            &mut *self.is_less,
        );
    }

    #[inline]
    fn merge(&mut self, left: usize, center: usize, right: usize) {
        merge(
            &mut *self.v,
            &mut self.scratch,
            left,
            center,
            right,
            &mut *self.is_less,
        );
    }
}

/// Records the steps instead of running them.
///
/// A recorded [`WorkTask::Sort`] is a base case, a recorded [`WorkTask::Merge`] a merge.
#[derive(Debug, Default)]
pub struct RecordedSteps {
    pub steps: Vec<WorkTask>,
}

impl MergeSteps for RecordedSteps {
    fn base_case(&mut self, interval: Interval) {
        self.steps.push(WorkTask::Sort(interval));
    }

    fn merge(&mut self, left: usize, center: usize, right: usize) {
        self.steps.push(WorkTask::Merge {
            left,
            center,
            right,
        });
    }
}
