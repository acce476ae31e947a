//! Planning of the per-record updates that persist one move.
//!
//! The store offers no multi-row transaction, so a move is persisted as a
//! batch of independent single-record updates. Planning works on the
//! orderings fetched from the store right before the batch is issued, never
//! on the board's own snapshot: the board may be filtered and hide leads
//! that still need shifting.

use crate::{Lead, LeadId, LeadMove, LeadPatch};

/// One update call of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedUpdate {
    pub id: LeadId,
    pub patch: LeadPatch,
    pub previous: Lead,
}

/// Every update needed to persist one move, one entry per lead whose stage
/// or index actually changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReindexBatch {
    updates: Vec<PlannedUpdate>,
}

impl ReindexBatch {
    /// Plan a reorder inside one stage.
    ///
    /// `ordering` is the stage's current content sorted by index.
    pub fn same_stage(lead_move: &LeadMove, ordering: &[Lead]) -> Self {
        let moved_id = &lead_move.lead.id;
        let source_index = lead_move.source.index;
        let destination_index = lead_move
            .destination
            .index
            .unwrap_or_else(|| last_slot(ordering, moved_id));

        let mut batch = Self::default();
        let neighbours = ordering.iter().filter(|lead| lead.id != *moved_id);

        if source_index > destination_index {
            // Moving towards the front: open the slot by shifting the range back
            for lead in neighbours
                .filter(|lead| lead.index >= destination_index && lead.index < source_index)
            {
                batch.push(lead, LeadPatch::index(lead.index + 1));
            }
        } else {
            // Moving towards the back: close the gap by shifting the range forward
            for lead in neighbours
                .filter(|lead| lead.index <= destination_index && lead.index > source_index)
            {
                batch.push(lead, LeadPatch::index(lead.index - 1));
            }
        }

        batch.push(&lead_move.lead, LeadPatch::index(destination_index));
        batch
    }

    /// Plan a move from one stage into another.
    ///
    /// Both orderings are the stages' current content sorted by index.
    pub fn cross_stage(
        lead_move: &LeadMove,
        source_ordering: &[Lead],
        destination_ordering: &[Lead],
    ) -> Self {
        let moved_id = &lead_move.lead.id;
        let source_index = lead_move.source.index;
        let destination_index = lead_move
            .destination
            .index
            .unwrap_or_else(|| last_slot(destination_ordering, moved_id));

        let mut batch = Self::default();

        for lead in source_ordering
            .iter()
            .filter(|lead| lead.id != *moved_id && lead.index > source_index)
        {
            batch.push(lead, LeadPatch::index(lead.index - 1));
        }

        for lead in destination_ordering
            .iter()
            .filter(|lead| lead.id != *moved_id && lead.index >= destination_index)
        {
            batch.push(lead, LeadPatch::index(lead.index + 1));
        }

        batch.push(
            &lead_move.lead,
            LeadPatch::stage_and_index(lead_move.destination.stage.clone(), destination_index),
        );
        batch
    }

    /// Plan whichever case the move calls for.
    ///
    /// `destination_ordering` is ignored for same-stage moves.
    pub fn plan(
        lead_move: &LeadMove,
        source_ordering: &[Lead],
        destination_ordering: &[Lead],
    ) -> Self {
        if lead_move.is_noop() {
            return Self::default();
        }
        if lead_move.is_same_stage() {
            Self::same_stage(lead_move, source_ordering)
        } else {
            Self::cross_stage(lead_move, source_ordering, destination_ordering)
        }
    }

    fn push(&mut self, lead: &Lead, patch: LeadPatch) {
        let changes_stage = patch.stage.as_ref().is_some_and(|s| *s != lead.stage);
        let changes_index = patch.index.is_some_and(|i| i != lead.index);
        if !changes_stage && !changes_index {
            return;
        }
        self.updates.push(PlannedUpdate {
            id: lead.id.clone(),
            patch,
            previous: lead.clone(),
        });
    }

    pub fn updates(&self) -> &[PlannedUpdate] {
        &self.updates
    }

    pub fn into_updates(self) -> Vec<PlannedUpdate> {
        self.updates
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn patch_for(&self, id: &LeadId) -> Option<&LeadPatch> {
        self.updates
            .iter()
            .find(|update| update.id == *id)
            .map(|update| &update.patch)
    }

    /// Apply every planned patch to the matching leads of `leads`.
    pub fn apply_to(&self, leads: &mut [Lead]) {
        for lead in leads.iter_mut() {
            if let Some(patch) = self.patch_for(&lead.id) {
                lead.apply(patch);
            }
        }
    }
}

/// Index one past the last lead other than the moved one.
fn last_slot(ordering: &[Lead], moved_id: &LeadId) -> i32 {
    let others = ordering.iter().filter(|lead| lead.id != *moved_id).count();
    i32::try_from(others).unwrap_or(i32::MAX)
}
