use crate::models::amount;
use crate::{LeadId, LeadPatch};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A lead as stored in the record store.
///
/// Only `stage` and `index` take part in board ordering. The remaining CRM
/// fields are carried along, and anything the model does not name is kept in
/// `extra` so that a round trip never drops data. The custom service's
/// camelCase field names are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,

    // Board placement
    pub stage: String,
    #[serde(default)]
    pub index: i32,

    // CRM fields
    #[serde(default, alias = "leadNumber", skip_serializing_if = "Option::is_none")]
    pub lead_number: Option<String>,
    #[serde(default, alias = "customerName", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, alias = "contactNumber", skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(
        default,
        alias = "loanAmountRequired",
        deserialize_with = "amount::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub loan_amount_required: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, alias = "leadReferredBy", skip_serializing_if = "Option::is_none")]
    pub lead_referred_by: Option<String>,
    #[serde(default, alias = "shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, alias = "leadStatus", skip_serializing_if = "Option::is_none")]
    pub lead_status: Option<String>,

    // Audit
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Lead {
    pub fn new(id: impl Into<LeadId>, stage: impl Into<String>, index: i32) -> Self {
        Self {
            id: id.into(),
            stage: stage.into(),
            index,
            lead_number: None,
            customer_name: None,
            contact_number: None,
            product: None,
            loan_amount_required: None,
            location: None,
            lead_referred_by: None,
            short_description: None,
            lead_status: None,
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, patch: &LeadPatch) {
        if let Some(ref stage) = patch.stage {
            self.stage = stage.clone();
        }
        if let Some(index) = patch.index {
            self.index = index;
        }
    }

    /// Copy of this lead with `patch` applied.
    pub fn patched(&self, patch: &LeadPatch) -> Self {
        let mut lead = self.clone();
        lead.apply(patch);
        lead
    }
}
