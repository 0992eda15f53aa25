use hybrid_sort_rs::stable::merge_sort_stack;
use hybrid_sort_rs::{Cutoff, DEFAULT_CUTOFF, MAX_CUTOFF, MIN_CUTOFF};

#[test]
fn accepts_the_valid_range() {
    for requested in MIN_CUTOFF..=MAX_CUTOFF {
        assert_eq!(Cutoff::new(requested).get(), requested);
    }
}

#[test]
fn out_of_range_falls_back_to_default() {
    for requested in [0, 1, 4, 21, 64, usize::MAX] {
        assert_eq!(Cutoff::new(requested).get(), DEFAULT_CUTOFF, "{requested}");
    }
    assert_eq!(Cutoff::default().get(), 10);
}

#[test]
fn floats_are_truncated_before_validation() {
    assert_eq!(Cutoff::from_f64(5.0).get(), 5);
    assert_eq!(Cutoff::from_f64(12.9).get(), 12);
    assert_eq!(Cutoff::from_f64(20.99).get(), 20);

    // 4.5 truncates to 4, which is out of range.
    assert_eq!(Cutoff::from_f64(4.5).get(), DEFAULT_CUTOFF);
    assert_eq!(Cutoff::from_f64(21.0).get(), DEFAULT_CUTOFF);
    assert_eq!(Cutoff::from_f64(-7.0).get(), DEFAULT_CUTOFF);
    assert_eq!(Cutoff::from_f64(f64::NAN).get(), DEFAULT_CUTOFF);
    assert_eq!(Cutoff::from_f64(f64::INFINITY).get(), DEFAULT_CUTOFF);
}

#[test]
fn conversions() {
    assert_eq!(Cutoff::from(7_usize), Cutoff::new(7));
    assert_eq!(Cutoff::from(7.8_f64), Cutoff::new(7));
    assert_eq!(Cutoff::from(Some(15_usize)), Cutoff::new(15));
    assert_eq!(Cutoff::from(None::<usize>), Cutoff::default());
}

#[test]
fn base_case_boundary() {
    let cutoff = Cutoff::new(5);
    assert!(cutoff.is_base_case(0, 4));
    assert!(!cutoff.is_base_case(0, 5));
    assert!(cutoff.is_base_case(7, 7));
}

#[test]
fn no_state_carried_between_calls() {
    // A call with a small cutoff must not change what a later default call does.
    merge_sort_stack::sort_with_cutoff(&mut [3, 2, 1, 0, 9, 8, 7, 6], 5_usize);

    assert_eq!(
        merge_sort_stack::schedule(12, Cutoff::default()),
        merge_sort_stack::schedule(12, 10_usize)
    );
    assert_eq!(merge_sort_stack::schedule(12, None::<usize>).len(), 3);
}
