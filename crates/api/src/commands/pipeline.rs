//! Pipeline board commands

use asnalo_core::analytics::stage_totals;
use asnalo_core::{Action, Store};
use asnalo_domain::{Deal, DealStage, Result, SfaError};
use serde::{Deserialize, Serialize};
use tracing::info;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// A deal on the board with the client fields its card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DealCard {
    pub deal: Deal,
    /// `None` when the deal references a client that does not exist
    pub client_company: Option<String>,
    pub client_name: Option<String>,
}

/// One board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PipelineColumn {
    pub stage: DealStage,
    pub label: String,
    pub deals: Vec<DealCard>,
    pub count: usize,
    /// Sum of deal amounts in the column
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub value: u64,
}

fn build_board(store: &Store) -> Vec<PipelineColumn> {
    stage_totals(store.deals())
        .into_iter()
        .map(|total| {
            let deals = store
                .deals()
                .iter()
                .filter(|deal| deal.stage == total.stage)
                .map(|deal| {
                    let client = store.client(&deal.client_id);
                    DealCard {
                        deal: deal.clone(),
                        client_company: client.map(|c| c.company.clone()),
                        client_name: client.map(|c| c.name.clone()),
                    }
                })
                .collect();
            PipelineColumn {
                stage: total.stage,
                label: total.stage.label().to_string(),
                deals,
                count: total.deal_count,
                value: total.amount,
            }
        })
        .collect()
}

/// Six columns in board order; empty stages are included
pub fn get_pipeline_board(ctx: &AppContext) -> Result<Vec<PipelineColumn>> {
    execute_command("pipeline::get_pipeline_board", || Ok(ctx.read(build_board)))
}

fn change_stage(
    ctx: &AppContext,
    deal_id: &str,
    stage: impl FnOnce(DealStage) -> DealStage,
) -> Result<Deal> {
    let current = ctx
        .read(|store| store.deal(deal_id).map(|deal| deal.stage))
        .ok_or_else(|| SfaError::NotFound(format!("deal {deal_id}")))?;
    let target = stage(current);

    if ctx.dispatch(Action::ChangeStage { deal_id: deal_id.to_string(), stage: target }) {
        info!(deal_id, from = %current, to = %target, "deal moved");
    }

    ctx.read(|store| store.deal(deal_id).cloned())
        .ok_or_else(|| SfaError::NotFound(format!("deal {deal_id}")))
}

/// Move a deal to any stage (drag and drop between columns)
pub fn move_deal_stage(ctx: &AppContext, deal_id: &str, stage: DealStage) -> Result<Deal> {
    execute_command("pipeline::move_deal_stage", || change_stage(ctx, deal_id, |_| stage))
}

/// Move a deal to the next column, wrapping from the last back to the first
pub fn advance_deal_stage(ctx: &AppContext, deal_id: &str) -> Result<Deal> {
    execute_command("pipeline::advance_deal_stage", || {
        change_stage(ctx, deal_id, |current| current.next())
    })
}
