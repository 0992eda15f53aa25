use hybrid_sort_rs::stable::{merge_sort_recursive, merge_sort_stack};
use hybrid_sort_rs::work_stack::{ExplicitStack, Interval, WorkTask};
use hybrid_sort_rs::Cutoff;

fn sort(left: usize, right: usize) -> WorkTask {
    WorkTask::Sort(Interval::new(left, right))
}

fn merge(left: usize, center: usize, right: usize) -> WorkTask {
    WorkTask::Merge {
        left,
        center,
        right,
    }
}

#[test]
fn stack_schedule_fixed_len_12() {
    let expected = vec![
        sort(0, 2),
        sort(3, 5),
        merge(0, 2, 5),
        sort(6, 8),
        sort(9, 11),
        merge(6, 8, 11),
        merge(0, 5, 11),
    ];

    assert_eq!(merge_sort_stack::schedule(12, 5_usize), expected);
    assert_eq!(merge_sort_recursive::schedule(12, 5_usize), expected);
}

#[test]
fn stack_schedule_fixed_len_23() {
    let expected = vec![
        sort(0, 2),
        sort(3, 5),
        merge(0, 2, 5),
        sort(6, 8),
        sort(9, 11),
        merge(6, 8, 11),
        merge(0, 5, 11),
        sort(12, 14),
        sort(15, 17),
        merge(12, 14, 17),
        sort(18, 22),
        merge(12, 17, 22),
        merge(0, 11, 22),
    ];

    assert_eq!(merge_sort_stack::schedule(23, 5_usize), expected);
    assert_eq!(merge_sort_recursive::schedule(23, 5_usize), expected);
}

#[test]
fn below_cutoff_is_a_single_base_case() {
    assert_eq!(merge_sort_stack::schedule(10, 10_usize), vec![sort(0, 9)]);
    assert_eq!(merge_sort_stack::schedule(11, 10_usize), vec![
        sort(0, 5),
        sort(6, 10),
        merge(0, 5, 10)
    ]);
}

#[test]
fn trivial_lengths_have_no_steps() {
    assert!(merge_sort_stack::schedule(0, Cutoff::default()).is_empty());
    assert!(merge_sort_stack::schedule(1, Cutoff::default()).is_empty());
    assert!(merge_sort_recursive::schedule(0, Cutoff::default()).is_empty());
    assert!(merge_sort_recursive::schedule(1, Cutoff::default()).is_empty());
}

#[test]
fn stack_matches_recursion_for_all_cutoffs() {
    for cutoff in 5..=20_usize {
        for len in (0..300).chain([1_000, 4_097, 10_000]) {
            assert_eq!(
                merge_sort_stack::schedule(len, cutoff),
                merge_sort_recursive::schedule(len, cutoff),
                "len {len} cutoff {cutoff}"
            );
        }
    }
}

#[test]
fn schedule_covers_every_position_once() {
    let len = 1_000;
    let base_cases = merge_sort_stack::schedule(len, 7_usize)
        .into_iter()
        .filter_map(|task| match task {
            WorkTask::Sort(interval) => Some(interval),
            WorkTask::Merge { .. } => None,
        })
        .collect::<Vec<_>>();

    let mut next = 0;
    for Interval { left, right } in base_cases {
        assert_eq!(left, next);
        assert!(right - left < 7);
        next = right + 1;
    }
    assert_eq!(next, len);
}

#[test]
fn explicit_stack_is_lifo() {
    let mut stack = ExplicitStack::new();
    assert!(stack.is_empty());

    stack.push(sort(0, 9));
    stack.push(merge(0, 4, 9));
    stack.push(sort(5, 9));
    assert_eq!(stack.len(), 3);

    assert_eq!(stack.pop(), Some(sort(5, 9)));
    stack.push(sort(7, 9));
    assert_eq!(stack.pop(), Some(sort(7, 9)));
    assert_eq!(stack.pop(), Some(merge(0, 4, 9)));
    assert_eq!(stack.pop(), Some(sort(0, 9)));
    assert_eq!(stack.pop(), None);

    assert_eq!(stack.high_water_mark(), 3);
}
