//! Work lists for the iterative engines.

/// Closed range `[left, right]` of indices, `left <= right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    pub left: usize,
    pub right: usize,
}

impl Interval {
    #[inline]
    pub const fn new(left: usize, right: usize) -> Self {
        debug_assert!(left <= right);
        Self { left, right }
    }

    /// Split point used by merge sort, `center` belongs to the left half.
    #[inline]
    pub const fn center(self) -> usize {
        self.left + (self.right - self.left) / 2
    }
}

/// Pending unit of work of the iterative merge sort.
///
/// Merge sort needs both tags, quicksort only ever sorts intervals and pushes bare [`Interval`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkTask {
    /// Sort the interval, either directly or by splitting it.
    Sort(Interval),
    /// Merge the sorted runs `[left, center]` and `[center + 1, right]`.
    Merge {
        left: usize,
        center: usize,
        right: usize,
    },
}

/// LIFO work list replacing the call stack. Created per sort call and dropped with it.
#[derive(Debug)]
pub struct ExplicitStack<Task> {
    tasks: Vec<Task>,
    high_water_mark: usize,
}

impl<Task> ExplicitStack<Task> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            high_water_mark: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
        self.high_water_mark = self.high_water_mark.max(self.tasks.len());
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Task> {
        self.tasks.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Largest number of tasks pending at the same time so far.
    pub fn high_water_mark(&self) -> usize {
        self.high_water_mark
    }
}

impl<Task> Default for ExplicitStack<Task> {
    fn default() -> Self {
        Self::new()
    }
}
