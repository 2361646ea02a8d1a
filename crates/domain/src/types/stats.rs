//! Aggregate types derived from the deal collection
//!
//! This module centralizes the rows produced by the metrics layer:
//! - Stage totals and stage financials (board columns, report chart)
//! - Monthly revenue / gross-profit series
//! - Current-month forecast
//! - Activity-type histogram
//! - Dashboard headline metrics and the report forecast table

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::types::month::MonthKey;
use crate::types::pipeline::{ActivityType, Deal, DealStage};

/* -------------------------------------------------------------------------- */
/* Stage Aggregates */
/* -------------------------------------------------------------------------- */

/// Pipeline value held in one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct StageTotal {
    pub stage: DealStage,
    pub deal_count: usize,
    /// Sum of deal amounts in yen
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub amount: u64,
}

/// Revenue and gross profit held in one stage (report chart)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct StageFinancials {
    pub stage: DealStage,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub revenue: u64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub gross_profit: u64,
}

/* -------------------------------------------------------------------------- */
/* Monthly Aggregates */
/* -------------------------------------------------------------------------- */

/// Expected revenue and gross profit for one close month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRow {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub month: MonthKey,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub revenue: u64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub gross_profit: u64,
}

/// Deals expected to close in the current calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct MonthForecast {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub month: MonthKey,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub revenue: u64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub gross_profit: u64,
    pub deals: Vec<Deal>,
}

/* -------------------------------------------------------------------------- */
/* Activity Aggregates */
/* -------------------------------------------------------------------------- */

/// Number of logged activities of one type across all deals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ActivityTypeCount {
    pub activity_type: ActivityType,
    pub count: usize,
}

/* -------------------------------------------------------------------------- */
/* Dashboard & Report */
/* -------------------------------------------------------------------------- */

/// Headline numbers and chart series for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Sum of all deal amounts
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub total_pipeline_value: u64,

    /// Deals not yet won or lost
    pub active_deal_count: usize,

    /// Won deals as a rounded percentage of all deals
    pub win_rate: u8,

    /// Distinct clients referenced by at least one deal
    pub active_client_count: usize,

    /// Stage totals for the pipeline chart (lost stage omitted)
    pub pipeline_chart: Vec<StageTotal>,

    pub monthly_series: Vec<MonthlyRow>,

    pub current_month: MonthForecast,
}

/// One row of the report forecast table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ForecastRow {
    pub id: String,
    pub title: String,
    pub stage: DealStage,
    pub probability: u8,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub amount: u64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub gross_profit: u64,
    pub expected_close_date: NaiveDate,
}
