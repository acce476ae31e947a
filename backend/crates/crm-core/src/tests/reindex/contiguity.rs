use crate::tests::stage_of;
use crate::{Lead, is_contiguous};

#[test]
fn given_zero_based_sequence_when_checked_then_contiguous() {
    assert!(is_contiguous(&stage_of("new", &["A", "B", "C"])));
    assert!(is_contiguous(&[]));
}

#[test]
fn given_duplicate_index_when_checked_then_not_contiguous() {
    let leads = vec![Lead::new("A", "new", 0), Lead::new("B", "new", 0)];

    assert!(!is_contiguous(&leads));
}

#[test]
fn given_gap_or_one_based_sequence_when_checked_then_not_contiguous() {
    let gap = vec![Lead::new("A", "new", 0), Lead::new("B", "new", 2)];
    let one_based = vec![Lead::new("A", "new", 1), Lead::new("B", "new", 2)];
    let negative = vec![Lead::new("A", "new", -1)];

    assert!(!is_contiguous(&gap));
    assert!(!is_contiguous(&one_based));
    assert!(!is_contiguous(&negative));
}
