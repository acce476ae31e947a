use crate::{Lead, LeadDraft, LeadId, LeadPatch};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_custom_service_payload_when_deserialized_then_string_id_and_amount_parsed() {
    // Given
    let payload = json!({
        "id": "1024",
        "stage": "qualified",
        "index": 3,
        "customer_name": "Asha Rao",
        "loan_amount_required": "2500000",
        "contactId": "77"
    });

    // When
    let lead: Lead = serde_json::from_value(payload).unwrap();

    // Then
    assert_that!(lead.id, eq(&LeadId::Text("1024".to_string())));
    assert_that!(lead.stage, eq("qualified"));
    assert_that!(lead.index, eq(3));
    assert_that!(lead.loan_amount_required, some(eq(2_500_000)));
    assert_eq!(lead.extra.get("contactId"), Some(&json!("77")));
}

#[test]
fn given_camel_case_payload_when_deserialized_then_named_fields_are_filled() {
    // Given
    let payload = json!({
        "id": "12",
        "stage": "new",
        "index": 1,
        "leadNumber": "LEAD-20250101-00001",
        "loanAmountRequired": "900000",
        "leadStatus": "hot",
        "createdAt": "2025-01-01T09:30:00Z"
    });

    // When
    let lead: Lead = serde_json::from_value(payload).unwrap();

    // Then
    assert_that!(lead.lead_number.as_deref(), some(eq("LEAD-20250101-00001")));
    assert_that!(lead.loan_amount_required, some(eq(900_000)));
    assert_that!(lead.lead_status.as_deref(), some(eq("hot")));
    assert!(lead.created_at.is_some());
    assert!(lead.extra.is_empty());
}

#[test]
fn given_numeric_id_when_round_tripped_then_shape_is_preserved() {
    // Given
    let payload = json!({ "id": 7, "stage": "new", "index": 0, "loan_amount_required": 150000 });

    // When
    let lead: Lead = serde_json::from_value(payload).unwrap();
    let back = serde_json::to_value(&lead).unwrap();

    // Then
    assert_that!(lead.id, eq(&LeadId::Number(7)));
    assert_eq!(back["id"], json!(7));
    assert_eq!(back["loan_amount_required"], json!(150000));
}

#[test]
fn given_null_amount_and_missing_index_when_deserialized_then_defaults_apply() {
    let lead: Lead =
        serde_json::from_value(json!({ "id": "a", "stage": "new", "loan_amount_required": null }))
            .unwrap();

    assert_that!(lead.index, eq(0));
    assert_that!(lead.loan_amount_required, none());
}

#[test]
fn given_patch_with_stage_and_index_when_applied_then_both_change() {
    // Given
    let mut lead = Lead::new("a", "new", 4);

    // When
    lead.apply(&LeadPatch::stage_and_index("won", 1));

    // Then
    assert_that!(lead.stage, eq("won"));
    assert_that!(lead.index, eq(1));
}

#[test]
fn given_index_patch_when_serialized_then_stage_is_omitted() {
    let body = serde_json::to_value(LeadPatch::index(2)).unwrap();

    assert_eq!(body, json!({ "index": 2 }));
}

#[test]
fn given_draft_with_fields_when_serialized_then_fields_are_flattened() {
    let draft = LeadDraft::new("new").with_field("customer_name", "Ravi");

    let body = serde_json::to_value(&draft).unwrap();

    assert_eq!(body, json!({ "stage": "new", "customer_name": "Ravi" }));
}
