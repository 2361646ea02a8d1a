//! Results produced by the sales assistant
//!
//! These are the typed outcomes of the generation gateway. Free-text results
//! (email drafts, pipeline reports) are plain strings and have no type here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{HEALTH_FALLBACK_ANALYSIS, HEALTH_FALLBACK_NEXT_STEP};
use crate::types::pipeline::{ActivityType, DealStage};

/// Deal health assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DealHealth {
    /// 0 (at risk) to 100 (healthy)
    pub health_score: u8,
    pub analysis: String,
    /// Ordered, most important first
    pub suggested_next_steps: Vec<String>,
}

impl DealHealth {
    /// Value returned when the assessment could not be produced
    pub fn fallback() -> Self {
        Self {
            health_score: 0,
            analysis: HEALTH_FALLBACK_ANALYSIS.to_string(),
            suggested_next_steps: vec![HEALTH_FALLBACK_NEXT_STEP.to_string()],
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

/// Structured activity extracted from a free-text note
///
/// Field names follow the generation contract (`next_action`, `due_date`,
/// `suggested_phase`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ActivitySummary {
    pub summary: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub next_action: String,
    pub due_date: NaiveDate,
    /// `None` when the note gives no reason to move the deal
    #[serde(rename = "suggested_phase")]
    pub suggested_stage: Option<DealStage>,
}
