use crate::{
    CardPosition, CoreError, DragEnd, Lead, LeadMove, ReindexBatch, ResolvedDrag,
    Result as CoreResult, StageSet, StageSlot, StageSummary,
};

use serde::Serialize;

/// The leads of one stage, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageBucket {
    pub stage: String,
    pub leads: Vec<Lead>,
}

/// Leads grouped by stage, one bucket per configured stage in configuration
/// order, each bucket sorted by index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageBuckets {
    buckets: Vec<StageBucket>,
}

impl StageBuckets {
    /// One empty bucket per configured stage.
    pub fn empty(stages: &StageSet) -> Self {
        Self {
            buckets: stages
                .iter()
                .map(|stage| StageBucket {
                    stage: stage.value.clone(),
                    leads: Vec::new(),
                })
                .collect(),
        }
    }

    /// Group an unordered lead list by stage.
    ///
    /// Leads whose stage is not configured land in the first stage. Sorting
    /// is stable, so leads sharing an index keep their fetch order.
    pub fn from_leads(leads: impl IntoIterator<Item = Lead>, stages: &StageSet) -> Self {
        let mut grouped = Self::empty(stages);
        let fallback = stages.fallback().value.as_str();

        for lead in leads {
            let stage = if stages.contains(&lead.stage) {
                lead.stage.clone()
            } else {
                fallback.to_string()
            };
            if let Some(bucket) = grouped.bucket_mut(&stage) {
                bucket.leads.push(lead);
            }
        }

        for bucket in &mut grouped.buckets {
            bucket.leads.sort_by_key(|lead| lead.index);
        }

        grouped
    }

    pub fn bucket(&self, stage: &str) -> Option<&[Lead]> {
        self.buckets
            .iter()
            .find(|bucket| bucket.stage == stage)
            .map(|bucket| bucket.leads.as_slice())
    }

    fn bucket_mut(&mut self, stage: &str) -> Option<&mut StageBucket> {
        self.buckets.iter_mut().find(|bucket| bucket.stage == stage)
    }

    pub fn lead_at(&self, stage: &str, position: usize) -> Option<&Lead> {
        self.bucket(stage).and_then(|leads| leads.get(position))
    }

    pub fn len(&self, stage: &str) -> usize {
        self.bucket(stage).map_or(0, <[Lead]>::len)
    }

    pub fn total_leads(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.leads.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageBucket> {
        self.buckets.iter()
    }

    pub fn summaries(&self, stages: &StageSet) -> Vec<StageSummary> {
        self.buckets
            .iter()
            .map(|bucket| StageSummary {
                stage: bucket.stage.clone(),
                label: stages.label_for(&bucket.stage).to_string(),
                count: bucket.leads.len(),
                total_amount: bucket
                    .leads
                    .iter()
                    .filter_map(|lead| lead.loan_amount_required)
                    .sum(),
            })
            .collect()
    }

    /// Validate a drag against the current buckets and translate it into a
    /// store-index move.
    ///
    /// Returns `Ok(None)` for drops outside any column and for drops back
    /// onto the starting slot. Nothing is mutated.
    pub fn resolve_drag(&self, event: &DragEnd) -> CoreResult<Option<ResolvedDrag>> {
        let Some(ref destination) = event.destination else {
            return Ok(None);
        };

        let source_leads = self
            .bucket(&event.source.stage)
            .ok_or_else(|| CoreError::unknown_stage(&event.source.stage))?;
        let destination_leads = self
            .bucket(&destination.stage)
            .ok_or_else(|| CoreError::unknown_stage(&destination.stage))?;

        let lead = source_leads.get(event.source.position).ok_or_else(|| {
            CoreError::position_out_of_range(
                &event.source.stage,
                event.source.position,
                source_leads.len(),
            )
        })?;

        if event.is_noop() {
            return Ok(None);
        }

        // The lead currently shown at the drop slot gives the stored index to
        // take over; past the last card the move appends.
        let destination_index = destination_leads
            .get(destination.position)
            .map(|occupant| occupant.index);

        // Source is the stored stage, which differs from the column for
        // leads of unconfigured stages
        let lead_move = LeadMove::new(
            lead.clone(),
            StageSlot {
                stage: destination.stage.clone(),
                index: destination_index,
            },
        );

        Ok(Some(ResolvedDrag {
            lead_move,
            source: event.source.clone(),
            destination: destination.clone(),
        }))
    }

    /// The optimistic snapshot after `drag`: the card is spliced out of its
    /// column and into the destination column, then the affected leads take
    /// the stage and index values the persisted batch will write.
    ///
    /// The batch is planned on the leads stored under the move's stages, so
    /// leads of other stages shown in the fallback column are left alone.
    pub fn apply_drag(&self, drag: &ResolvedDrag) -> CoreResult<Self> {
        let lead_move = &drag.lead_move;
        let batch = ReindexBatch::plan(
            lead_move,
            &self.stored_ordering(&lead_move.source.stage),
            &self.stored_ordering(&lead_move.destination.stage),
        );

        let mut next = self.clone();
        let source_bucket = next
            .bucket_mut(&drag.source.stage)
            .ok_or_else(|| CoreError::unknown_stage(&drag.source.stage))?;
        let lead = take_at(source_bucket, &drag.source)?;

        let destination_bucket = next
            .bucket_mut(&drag.destination.stage)
            .ok_or_else(|| CoreError::unknown_stage(&drag.destination.stage))?;
        insert_at(&mut destination_bucket.leads, drag.destination.position, lead);

        // A column can hold leads of several stored stages, so the splice
        // alone does not fix the order; the written indices do.
        for bucket in &mut next.buckets {
            batch.apply_to(&mut bucket.leads);
            bucket.leads.sort_by_key(|lead| lead.index);
        }

        Ok(next)
    }

    /// Leads stored under `stage`, in index order, wherever they are shown.
    fn stored_ordering(&self, stage: &str) -> Vec<Lead> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.leads.iter())
            .filter(|lead| lead.stage == stage)
            .cloned()
            .collect()
    }
}

fn take_at(bucket: &mut StageBucket, source: &CardPosition) -> CoreResult<Lead> {
    if source.position >= bucket.leads.len() {
        return Err(CoreError::position_out_of_range(
            &source.stage,
            source.position,
            bucket.leads.len(),
        ));
    }
    Ok(bucket.leads.remove(source.position))
}

fn insert_at(leads: &mut Vec<Lead>, position: usize, lead: Lead) {
    let position = position.min(leads.len());
    leads.insert(position, lead);
}
