pub mod schedule;

// Insertion sort over the whole slice.
pub mod insertion_sort;

// Top-down merge sort, recursive.
pub mod merge_sort_recursive;

// Top-down merge sort, explicit task stack instead of recursion.
pub mod merge_sort_stack;
