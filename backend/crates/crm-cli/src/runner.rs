use crate::{
    Cli, CliResult, board_commands::BoardCommands, commands::Commands,
    lead_commands::LeadCommands,
};

use crm_board::{BoardSettings, LeadBoard};
use crm_config::Config;
use crm_core::{CardPosition, DragEnd, LeadId, StageBuckets, StageSet};
use crm_store::{HttpRecordStore, ListFilter, RecordStore, Sort};

use std::sync::Arc;

use log::info;
use serde_json::{Value, json};

/// Apply the `--server` and `--token` flags on top of the loaded config.
pub fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(ref server) = cli.server {
        config.service.base_url = server.clone();
    }
    if let Some(ref token) = cli.token {
        config.service.auth_token = Some(token.clone());
    }
}

/// Execute the parsed command against the configured service.
pub async fn run(cli: &Cli, config: &Config) -> CliResult<Value> {
    let store = Arc::new(HttpRecordStore::from_config(&config.service)?);

    match &cli.command {
        Commands::Lead { action } => run_lead(action, store.as_ref(), config).await,
        Commands::Board { action } => run_board(action, store, config).await,
    }
}

async fn run_lead<S: RecordStore>(
    action: &LeadCommands,
    store: &S,
    config: &Config,
) -> CliResult<Value> {
    match action {
        LeadCommands::List { stage } => {
            let filter = match stage {
                Some(stage) => ListFilter::stage(stage.as_str()),
                None => ListFilter::new(),
            };
            let leads = store
                .list_all(&filter, &Sort::by_index(), config.board.page_size)
                .await?;
            Ok(json!(leads))
        }
        LeadCommands::Get { id } => {
            let lead = store.get(&parse_lead_id(id)).await?;
            Ok(json!(lead))
        }
    }
}

async fn run_board<S: RecordStore>(
    action: &BoardCommands,
    store: Arc<S>,
    config: &Config,
) -> CliResult<Value> {
    let stages = BoardSettings::stage_set(&config.board)?;
    let settings = BoardSettings::from_config(&config.board);
    let mut board = LeadBoard::load(store, stages, settings).await?;

    match action {
        BoardCommands::Show => Ok(board_view(board.buckets(), board.stages())),
        BoardCommands::Move {
            from_stage,
            from_position,
            to_stage,
            to_position,
        } => {
            // Without a position the card goes after the last one
            let destination_position =
                to_position.unwrap_or_else(|| board.buckets().len(to_stage));
            let event = DragEnd::new(
                CardPosition::new(from_stage.as_str(), *from_position),
                Some(CardPosition::new(to_stage.as_str(), destination_position)),
            );

            let report = board.handle_drag_end(&event).await?;
            let updated = report.as_ref().map_or(0, |report| report.updated.len());
            info!("Move finished with {} updates", updated);

            let stages: Vec<Value> = board
                .buckets()
                .iter()
                .filter(|bucket| bucket.stage == *from_stage || bucket.stage == *to_stage)
                .map(|bucket| json!(bucket))
                .collect();
            Ok(json!({
                "moved": report.is_some(),
                "updated": updated,
                "stages": stages,
            }))
        }
    }
}

/// Stages in column order with their header figures and leads.
pub(crate) fn board_view(buckets: &StageBuckets, stages: &StageSet) -> Value {
    let columns: Vec<Value> = buckets
        .summaries(stages)
        .into_iter()
        .zip(buckets.iter())
        .map(|(summary, bucket)| {
            json!({
                "stage": summary.stage,
                "label": summary.label,
                "count": summary.count,
                "total_amount": summary.total_amount,
                "leads": bucket.leads,
            })
        })
        .collect();
    json!(columns)
}

/// Numeric ids are sent as numbers, anything else verbatim.
pub(crate) fn parse_lead_id(raw: &str) -> LeadId {
    raw.trim()
        .parse::<i64>()
        .map(LeadId::Number)
        .unwrap_or_else(|_| LeadId::from(raw.trim()))
}
