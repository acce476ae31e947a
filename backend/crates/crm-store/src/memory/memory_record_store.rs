use crate::{ListPage, ListParams, RecordStore, SortOrder, StoreError, StoreResult, UpdateParams};

use crm_core::{Lead, LeadDraft, LeadId};

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

struct Records {
    leads: BTreeMap<LeadId, Lead>,
    next_id: i64,
}

/// In-process record store with the same contract as the HTTP one.
///
/// Filters compare the record's JSON fields for equality and sorting works
/// on any numeric or string field, so listings behave like the service's.
pub struct MemoryRecordStore {
    records: RwLock<Records>,
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records {
                leads: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Seed the store with existing records, keeping their ids.
    pub fn with_leads(leads: impl IntoIterator<Item = Lead>) -> Self {
        let mut next_id = 1;
        let leads: BTreeMap<LeadId, Lead> = leads
            .into_iter()
            .map(|lead| {
                if let LeadId::Number(n) = lead.id {
                    next_id = next_id.max(n + 1);
                }
                (lead.id.clone(), lead)
            })
            .collect();

        Self {
            records: RwLock::new(Records { leads, next_id }),
        }
    }

    /// Every stored record, ordered by id.
    pub async fn snapshot(&self) -> Vec<Lead> {
        self.records.read().await.leads.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.leads.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.leads.is_empty()
    }
}

fn to_fields(lead: &Lead) -> StoreResult<Map<String, Value>> {
    match serde_json::to_value(lead)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(StoreError::invalid_request("lead did not serialize to an object")),
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        // Missing and null values sort last
        (Some(Value::Null) | None, Some(Value::Null) | None) => Ordering::Equal,
        (Some(Value::Null) | None, _) => Ordering::Greater,
        (_, Some(Value::Null) | None) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list(&self, params: &ListParams) -> StoreResult<ListPage> {
        if params.pagination.page == 0 || params.pagination.per_page == 0 {
            return Err(StoreError::invalid_request(
                "page and perPage must be at least 1",
            ));
        }

        let records = self.records.read().await;

        let mut matching = Vec::new();
        for lead in records.leads.values() {
            let fields = to_fields(lead)?;
            let keep = params
                .filter
                .iter()
                .all(|(field, expected)| fields.get(field) == Some(expected));
            if keep {
                matching.push((fields, lead));
            }
        }

        let field = params.sort.field.as_str();
        matching.sort_by(|(a_fields, a), (b_fields, b)| {
            let ordering = compare_values(a_fields.get(field), b_fields.get(field));
            let ordering = match params.sort.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            };
            ordering.then_with(|| a.id.cmp(&b.id))
        });

        let total = matching.len() as u64;
        let data = matching
            .into_iter()
            .skip(params.pagination.offset())
            .take(params.pagination.per_page as usize)
            .map(|(_, lead)| lead.clone())
            .collect();

        Ok(ListPage { data, total })
    }

    async fn get(&self, id: &LeadId) -> StoreResult<Lead> {
        self.records
            .read()
            .await
            .leads
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn create(&self, draft: &LeadDraft) -> StoreResult<Lead> {
        let mut records = self.records.write().await;

        let mut next_id = records.next_id;
        while records.leads.contains_key(&LeadId::Number(next_id)) {
            next_id += 1;
        }
        records.next_id = next_id + 1;

        let index = match draft.index {
            Some(index) => index,
            None => {
                let in_stage = records
                    .leads
                    .values()
                    .filter(|lead| lead.stage == draft.stage)
                    .count();
                i32::try_from(in_stage).unwrap_or(i32::MAX)
            }
        };

        let mut fields = draft.fields.clone();
        fields.insert("id".to_string(), Value::from(next_id));
        fields.insert("stage".to_string(), Value::String(draft.stage.clone()));
        fields.insert("index".to_string(), Value::from(index));
        let lead: Lead = serde_json::from_value(Value::Object(fields))?;

        records.leads.insert(lead.id.clone(), lead.clone());
        Ok(lead)
    }

    async fn update(&self, params: &UpdateParams) -> StoreResult<Lead> {
        let mut records = self.records.write().await;
        let lead = records
            .leads
            .get_mut(&params.id)
            .ok_or_else(|| StoreError::not_found(&params.id))?;
        lead.apply(&params.data);
        Ok(lead.clone())
    }

    async fn delete(&self, id: &LeadId) -> StoreResult<()> {
        self.records
            .write()
            .await
            .leads
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(id))
    }
}
