// Median-of-three quicksort, recursive.
pub mod quicksort_recursive;

// Median-of-three quicksort, explicit interval stack instead of recursion.
pub mod quicksort_stack;
