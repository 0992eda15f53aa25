use sort_test_tools::{instantiate_sort_tests, instantiate_stable_sort_tests};

type TestSort = hybrid_sort_rs::stable::insertion_sort::SortImpl;

instantiate_sort_tests!(TestSort);
instantiate_stable_sort_tests!(TestSort);
