use crate::tests::{ids, indices, stage_of, test_stages};
use crate::{CardPosition, CoreError, DragEnd, Lead, StageBuckets, is_contiguous};

use googletest::prelude::*;

fn board() -> StageBuckets {
    let mut leads = stage_of("new", &["A", "B", "C", "D"]);
    leads.extend(stage_of("contacted", &["X", "Y"]));
    StageBuckets::from_leads(leads, &test_stages())
}

fn drag(from: (&str, usize), to: Option<(&str, usize)>) -> DragEnd {
    DragEnd::new(
        CardPosition::new(from.0, from.1),
        to.map(|(stage, position)| CardPosition::new(stage, position)),
    )
}

// =========================================================================
// Grouping
// =========================================================================

#[test]
fn given_unordered_leads_when_grouped_then_each_bucket_is_sorted_by_index() {
    // Given
    let leads = vec![
        Lead::new("C", "new", 2),
        Lead::new("A", "new", 0),
        Lead::new("Y", "won", 1),
        Lead::new("B", "new", 1),
        Lead::new("X", "won", 0),
    ];

    // When
    let buckets = StageBuckets::from_leads(leads, &test_stages());

    // Then
    assert_eq!(ids(buckets.bucket("new").unwrap()), ["A", "B", "C"]);
    assert_eq!(ids(buckets.bucket("won").unwrap()), ["X", "Y"]);
    assert!(buckets.bucket("contacted").unwrap().is_empty());
}

#[test]
fn given_lead_with_unconfigured_stage_when_grouped_then_it_lands_in_first_stage() {
    let leads = vec![Lead::new("A", "new", 0), Lead::new("Z", "archived", 1)];

    let buckets = StageBuckets::from_leads(leads, &test_stages());

    assert_eq!(ids(buckets.bucket("new").unwrap()), ["A", "Z"]);
    assert_that!(buckets.bucket("archived"), none());
}

#[test]
fn given_amounts_when_summarised_then_totals_and_labels_are_reported() {
    // Given
    let mut first = Lead::new("A", "new", 0);
    first.loan_amount_required = Some(100_000);
    let mut second = Lead::new("B", "new", 1);
    second.loan_amount_required = Some(250_000);
    let third = Lead::new("C", "new", 2);

    // When
    let summaries =
        StageBuckets::from_leads(vec![first, second, third], &test_stages()).summaries(&test_stages());

    // Then
    assert_that!(summaries.len(), eq(3));
    assert_that!(summaries[0].label, eq("New"));
    assert_that!(summaries[0].count, eq(3));
    assert_that!(summaries[0].total_amount, eq(350_000));
    assert_that!(summaries[1].count, eq(0));
}

// =========================================================================
// Drag resolution
// =========================================================================

#[test]
fn given_drop_outside_any_column_when_resolved_then_noop() {
    let result = board().resolve_drag(&drag(("new", 1), None)).unwrap();

    assert_that!(result, none());
}

#[test]
fn given_drop_on_same_slot_when_resolved_then_noop() {
    let result = board().resolve_drag(&drag(("new", 2), Some(("new", 2)))).unwrap();

    assert_that!(result, none());
}

#[test]
fn given_source_position_past_end_when_resolved_then_validation_error() {
    let result = board().resolve_drag(&drag(("contacted", 5), Some(("new", 0))));

    assert!(matches!(
        result,
        Err(CoreError::PositionOutOfRange { position: 5, len: 2, .. })
    ));
}

#[test]
fn given_unknown_destination_stage_when_resolved_then_validation_error() {
    let result = board().resolve_drag(&drag(("new", 0), Some(("lost", 0))));

    assert!(matches!(result, Err(CoreError::UnknownStage { .. })));
}

#[test]
fn given_drop_onto_occupied_slot_when_resolved_then_occupant_index_is_the_destination() {
    // When
    let drag = board()
        .resolve_drag(&drag(("new", 0), Some(("contacted", 1))))
        .unwrap()
        .unwrap();

    // Then
    assert_that!(drag.lead_move.lead.id.to_string(), eq("A"));
    assert_that!(drag.lead_move.source.index, eq(0));
    assert_that!(drag.lead_move.destination.stage, eq("contacted"));
    assert_that!(drag.lead_move.destination.index, some(eq(1)));
}

#[test]
fn given_drop_past_last_card_when_resolved_then_destination_appends() {
    let drag = board()
        .resolve_drag(&drag(("new", 3), Some(("contacted", 2))))
        .unwrap()
        .unwrap();

    assert_that!(drag.lead_move.destination.index, none());
}

// =========================================================================
// Optimistic reorder
// =========================================================================

#[test]
fn given_forward_move_in_same_stage_when_applied_then_order_and_indices_follow() {
    // Given
    let buckets = board();
    let drag = buckets
        .resolve_drag(&drag(("new", 0), Some(("new", 2))))
        .unwrap()
        .unwrap();

    // When
    let next = buckets.apply_drag(&drag).unwrap();

    // Then
    let column = next.bucket("new").unwrap();
    assert_eq!(ids(column), ["B", "C", "A", "D"]);
    assert_eq!(indices(column), [0, 1, 2, 3]);
}

#[test]
fn given_backward_move_in_same_stage_when_applied_then_order_and_indices_follow() {
    let buckets = board();
    let drag = buckets
        .resolve_drag(&drag(("new", 3), Some(("new", 1))))
        .unwrap()
        .unwrap();

    let next = buckets.apply_drag(&drag).unwrap();

    let column = next.bucket("new").unwrap();
    assert_eq!(ids(column), ["A", "D", "B", "C"]);
    assert_eq!(indices(column), [0, 1, 2, 3]);
}

#[test]
fn given_cross_stage_move_when_applied_then_both_columns_are_renumbered() {
    // Given
    let buckets = board();
    let drag = buckets
        .resolve_drag(&drag(("new", 0), Some(("contacted", 1))))
        .unwrap()
        .unwrap();

    // When
    let next = buckets.apply_drag(&drag).unwrap();

    // Then
    let source = next.bucket("new").unwrap();
    let destination = next.bucket("contacted").unwrap();
    assert_eq!(ids(source), ["B", "C", "D"]);
    assert_eq!(indices(source), [0, 1, 2]);
    assert_eq!(ids(destination), ["X", "A", "Y"]);
    assert_eq!(indices(destination), [0, 1, 2]);
    assert_that!(destination[1].stage, eq("contacted"));
}

#[test]
fn given_cross_stage_append_when_applied_then_lead_is_last() {
    let buckets = board();
    let drag = buckets
        .resolve_drag(&drag(("new", 1), Some(("won", 0))))
        .unwrap()
        .unwrap();

    let next = buckets.apply_drag(&drag).unwrap();

    let won = next.bucket("won").unwrap();
    assert_eq!(ids(won), ["B"]);
    assert_eq!(indices(won), [0]);
    assert!(is_contiguous(next.bucket("new").unwrap()));
}

#[test]
fn given_applied_drag_when_comparing_snapshots_then_original_is_untouched() {
    let buckets = board();
    let drag = buckets
        .resolve_drag(&drag(("new", 0), Some(("new", 3))))
        .unwrap()
        .unwrap();

    let next = buckets.apply_drag(&drag).unwrap();

    assert_ne!(next, buckets);
    assert_eq!(ids(buckets.bucket("new").unwrap()), ["A", "B", "C", "D"]);
}

// =========================================================================
// Leads of unconfigured stages
// =========================================================================

fn board_with_archived_lead() -> StageBuckets {
    let mut leads = stage_of("new", &["A", "B", "C"]);
    leads.push(Lead::new("Z", "archived", 0));
    StageBuckets::from_leads(leads, &test_stages())
}

fn stored_in(column: &[Lead], stage: &str) -> Vec<Lead> {
    column.iter().filter(|lead| lead.stage == stage).cloned().collect()
}

#[test]
fn given_lead_of_unconfigured_stage_when_resolved_then_source_is_its_stored_stage() {
    // Given
    let buckets = board_with_archived_lead();
    assert_eq!(ids(buckets.bucket("new").unwrap()), ["A", "Z", "B", "C"]);

    // When
    let drag = buckets
        .resolve_drag(&drag(("new", 1), Some(("new", 3))))
        .unwrap()
        .unwrap();

    // Then
    assert_that!(drag.lead_move.source.stage, eq("archived"));
    assert_that!(drag.lead_move.source.index, eq(0));
    assert_that!(drag.lead_move.is_same_stage(), eq(false));
    assert_that!(drag.source.stage, eq("new"));
}

#[test]
fn given_lead_of_unconfigured_stage_when_moved_out_of_fallback_column_then_fallback_leads_keep_indices() {
    // Given
    let buckets = board_with_archived_lead();
    let drag = buckets
        .resolve_drag(&drag(("new", 1), Some(("won", 0))))
        .unwrap()
        .unwrap();

    // When
    let next = buckets.apply_drag(&drag).unwrap();

    // Then
    let column = next.bucket("new").unwrap();
    assert_eq!(ids(column), ["A", "B", "C"]);
    assert_eq!(indices(column), [0, 1, 2]);
    let won = next.bucket("won").unwrap();
    assert_eq!(ids(won), ["Z"]);
    assert_that!(won[0].stage, eq("won"));
}

#[test]
fn given_lead_of_unconfigured_stage_when_moved_within_fallback_column_then_it_joins_that_stage() {
    // Given
    let buckets = board_with_archived_lead();
    let drag = buckets
        .resolve_drag(&drag(("new", 1), Some(("new", 3))))
        .unwrap()
        .unwrap();

    // When
    let next = buckets.apply_drag(&drag).unwrap();

    // Then: Z takes the occupant's index and the occupant shifts back
    let column = next.bucket("new").unwrap();
    assert_eq!(ids(column), ["A", "B", "Z", "C"]);
    assert_eq!(indices(column), [0, 1, 2, 3]);
    assert!(column.iter().all(|lead| lead.stage == "new"));
    assert!(is_contiguous(&stored_in(column, "new")));
}
