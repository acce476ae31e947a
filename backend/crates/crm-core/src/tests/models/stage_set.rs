use crate::{CoreError, LeadStage, StageSet};

use googletest::prelude::*;

#[test]
fn given_empty_list_when_building_stage_set_then_error() {
    let result = StageSet::new(vec![]);

    assert!(matches!(result, Err(CoreError::EmptyStages { .. })));
}

#[test]
fn given_duplicate_values_when_building_stage_set_then_error() {
    let result = StageSet::new(vec![
        LeadStage::new("new", "New"),
        LeadStage::new("new", "Fresh"),
    ]);

    assert!(matches!(result, Err(CoreError::DuplicateStage { .. })));
}

#[test]
fn given_blank_value_when_building_stage_set_then_error() {
    let result = StageSet::new(vec![LeadStage::new("  ", "Blank")]);

    assert_that!(result, err(anything()));
}

#[test]
fn given_stage_set_when_looking_up_labels_then_unknown_values_fall_through() {
    let stages = crate::tests::test_stages();

    assert_that!(stages.label_for("contacted"), eq("Contacted"));
    assert_that!(stages.label_for("archived"), eq("archived"));
    assert_that!(stages.fallback().value, eq("new"));
    assert_that!(stages.len(), eq(3));
}
