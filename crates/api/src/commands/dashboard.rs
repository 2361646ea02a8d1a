//! Dashboard commands

use asnalo_core::analytics::{dashboard_metrics, weighted_pipeline_value};
use asnalo_domain::{DashboardMetrics, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Everything the dashboard screen renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub metrics: DashboardMetrics,
    /// Open pipeline weighted by win probability
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub weighted_pipeline_value: u64,
}

/// Headline metrics, pipeline chart, monthly series and this month's closes
pub fn get_dashboard(ctx: &AppContext, today: NaiveDate) -> Result<DashboardView> {
    execute_command("dashboard::get_dashboard", || {
        Ok(ctx.read(|store| DashboardView {
            metrics: dashboard_metrics(store.deals(), today),
            weighted_pipeline_value: weighted_pipeline_value(store.deals()),
        }))
    })
}
