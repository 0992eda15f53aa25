use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }

            #[inline]
            fn sort_with_cutoff<T>(arr: &mut [T], cutoff: usize)
            where
                T: Ord,
            {
                sort_with_cutoff(arr, cutoff);
            }
        }
    };
    ($name:expr, max_test_len = $max_test_len:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }

            #[inline]
            fn sort_with_cutoff<T>(arr: &mut [T], cutoff: usize)
            where
                T: Ord,
            {
                sort_with_cutoff(arr, cutoff);
            }

            fn max_test_len() -> usize {
                $max_test_len
            }
        }
    };
}

pub mod cutoff;
pub mod merge;
pub mod partition;
pub mod pivot;
pub mod smallsort;
pub mod stable;
pub mod unstable;
pub mod work_stack;

pub use cutoff::{Cutoff, DEFAULT_CUTOFF, MAX_CUTOFF, MIN_CUTOFF};
pub use work_stack::{ExplicitStack, Interval, WorkTask};

/// Natural ascending order for types that only implement [`PartialOrd`].
///
/// Returns `Less` iff `a < b`, `Equal` iff `a == b` and `Greater` otherwise, which puts values
/// that compare unordered (`NaN`) after everything else they are compared to. Only a total order
/// on the values actually present gives a sorted result.
///
/// ```
/// let mut v = [2.5, -1.0, 0.0];
/// hybrid_sort_rs::unstable::quicksort_stack::sort_by(&mut v, hybrid_sort_rs::comparator);
/// assert_eq!(v, [-1.0, 0.0, 2.5]);
/// ```
#[inline]
pub fn comparator<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a == b {
        Ordering::Equal
    } else {
        Ordering::Greater
    }
}
