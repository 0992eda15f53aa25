use std::cmp::Ordering;
use std::fmt;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// `cutoff` is the requested insertion sort threshold, implementations are free to normalize
    /// it.
    fn sort_with_cutoff<T>(arr: &mut [T], cutoff: usize)
    where
        T: Ord;

    /// Quadratic implementations lower this to keep the generated tests fast.
    fn max_test_len() -> usize {
        usize::MAX
    }
}

pub trait Partition {
    fn name() -> String;

    /// Picks a pivot inside `arr`, partitions around it and returns its final position.
    fn partition<T>(arr: &mut [T]) -> usize
    where
        T: Ord;

    fn partition_by<T, F>(arr: &mut [T], is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool;
}

/// First position whose element compares less than its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSorted {
    pub index: usize,
}

impl fmt::Display for NotSorted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slice is not sorted near index: {}", self.index)
    }
}

impl std::error::Error for NotSorted {}

pub fn check_sorted<T: Ord>(v: &[T]) -> Result<(), NotSorted> {
    check_sorted_by(v, |a, b| a.cmp(b))
}

pub fn check_sorted_by<T, F>(v: &[T], mut compare: F) -> Result<(), NotSorted>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match v
        .windows(2)
        .position(|w| compare(&w[0], &w[1]) == Ordering::Greater)
    {
        Some(i) => Err(NotSorted { index: i + 1 }),
        None => Ok(()),
    }
}

/// Renders `v` as `[a,b,c]`.
pub fn display<T: fmt::Display>(v: &[T]) -> String {
    let mut out = String::with_capacity(v.len() * 4 + 2);
    out.push('[');
    for (i, elem) in v.iter().enumerate() {
        if i != 0 {
            out.push(',');
        }
        out.push_str(&elem.to_string());
    }
    out.push(']');
    out
}

#[doc(hidden)]
pub use paste;

pub mod patterns;
