//! Reports commands

use asnalo_core::analytics::{activity_histogram, forecast_table, stage_financials};
use asnalo_domain::{ActivityTypeCount, ForecastRow, Result, StageFinancials};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_command, execute_command_async};

/// Tables and chart series for the reports screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ReportsView {
    pub activity_histogram: Vec<ActivityTypeCount>,
    /// Revenue and gross profit per stage, lost stage omitted
    pub stage_financials: Vec<StageFinancials>,
    pub forecast_table: Vec<ForecastRow>,
}

pub fn get_reports(ctx: &AppContext) -> Result<ReportsView> {
    execute_command("reports::get_reports", || {
        Ok(ctx.read(|store| ReportsView {
            activity_histogram: activity_histogram(store.deals()),
            stage_financials: stage_financials(store.deals()),
            forecast_table: forecast_table(store.deals()),
        }))
    })
}

/// Markdown executive summary of the current pipeline
///
/// Generation failures yield the fallback text rather than an error.
pub async fn generate_pipeline_report(ctx: &AppContext) -> Result<String> {
    execute_command_async("reports::generate_pipeline_report", || async move {
        let deals = ctx.read(|store| store.deals().to_vec());
        Ok(ctx.assistant().generate_pipeline_report(&deals).await)
    })
    .await
}
