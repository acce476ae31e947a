use crate::tests::test_stages;
use crate::{CardPosition, DragEnd, Lead, ReindexBatch, StageBuckets, is_contiguous};

use proptest::prelude::*;

fn seeded_leads(stages: &[String], sizes: &[usize]) -> Vec<Lead> {
    stages
        .iter()
        .zip(sizes)
        .flat_map(|(stage, size)| {
            (0..*size).map(move |index| Lead::new(format!("{stage}-{index}"), stage.as_str(), index as i32))
        })
        .collect()
}

// =========================================================================
// Property-Based Tests - Reordering
// =========================================================================

proptest! {
    #[test]
    fn given_any_drag_when_applied_and_persisted_then_stages_stay_contiguous_and_agree(
        sizes in prop::collection::vec(0usize..6, 3),
        source_stage in 0usize..3,
        source_position in 0usize..6,
        destination_stage in 0usize..3,
        destination_position in 0usize..8,
    ) {
        prop_assume!(source_position < sizes[source_stage]);

        let stages = test_stages();
        let names: Vec<String> = stages.iter().map(|s| s.value.clone()).collect();
        let leads = seeded_leads(&names, &sizes);
        let buckets = StageBuckets::from_leads(leads.clone(), &stages);

        let event = DragEnd::new(
            CardPosition::new(names[source_stage].as_str(), source_position),
            Some(CardPosition::new(names[destination_stage].as_str(), destination_position)),
        );
        let Some(drag) = buckets.resolve_drag(&event).unwrap() else {
            return Ok(());
        };

        // Optimistic snapshot
        let optimistic = buckets.apply_drag(&drag).unwrap();
        for bucket in optimistic.iter() {
            prop_assert!(is_contiguous(&bucket.leads), "stage {} not contiguous", bucket.stage);
        }
        prop_assert_eq!(optimistic.total_leads(), leads.len());

        // Persisted batch applied to a full copy of the store, then regrouped
        let source = buckets.bucket(&drag.lead_move.source.stage).unwrap();
        let destination = buckets.bucket(&drag.lead_move.destination.stage).unwrap();
        let batch = ReindexBatch::plan(&drag.lead_move, source, destination);
        let mut store = leads;
        batch.apply_to(&mut store);

        let refetched = StageBuckets::from_leads(store, &stages);
        prop_assert_eq!(refetched, optimistic);
    }
}
