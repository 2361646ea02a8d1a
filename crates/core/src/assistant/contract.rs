//! Response contract for structured generation calls
//!
//! The generation service is asked for JSON matching a schema, but nothing
//! guarantees it complies. Every structured response is validated here into a
//! typed result or a [`GenerationError::InvalidResponse`].

use std::str::FromStr;

use asnalo_domain::constants::MAX_HEALTH_SCORE;
use asnalo_domain::{ActivitySummary, ActivityType, DealHealth, DealStage, GenerationError};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

pub const HEALTH_SCHEMA_NAME: &str = "deal_health";
pub const ACTIVITY_SUMMARY_SCHEMA_NAME: &str = "activity_summary";

/// Schema for [`DealHealth`] responses
pub fn health_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "healthScore": { "type": "INTEGER" },
            "analysis": { "type": "STRING" },
            "suggestedNextSteps": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["healthScore", "analysis", "suggestedNextSteps"]
    })
}

/// Schema for [`ActivitySummary`] responses
pub fn activity_summary_schema() -> Value {
    let types: Vec<String> = ActivityType::ALL.iter().map(ToString::to_string).collect();
    let mut phases: Vec<String> = DealStage::ALL.iter().map(ToString::to_string).collect();
    phases.push("none".to_string());
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "type": { "type": "STRING", "enum": types },
            "next_action": { "type": "STRING" },
            "due_date": { "type": "STRING" },
            "suggested_phase": { "type": "STRING", "enum": phases }
        },
        "required": ["summary", "type", "next_action", "due_date", "suggested_phase"]
    })
}

/// Remove a surrounding markdown code fence, if any
///
/// Models occasionally wrap JSON in ```` ```json ... ``` ```` even when a
/// JSON mime type was requested.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening line
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => strip_json_tag(body.trim()),
    }
}

/// Single-line fences carry the tag glued to the payload: ```` ```json{..}``` ````
fn strip_json_tag(body: &str) -> &str {
    match body.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => body[4..].trim_start(),
        _ => body,
    }
}

/// Free-text responses must not be blank
pub fn parse_text(text: String) -> Result<String, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(text)
}

fn invalid(message: impl Into<String>) -> GenerationError {
    GenerationError::InvalidResponse(message.into())
}

fn decode<'a, T: Deserialize<'a>>(text: &'a str) -> Result<T, GenerationError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    serde_json::from_str(body).map_err(|e| invalid(format!("malformed JSON: {e}")))
}

/* -------------------------------------------------------------------------- */
/* Deal Health */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHealth {
    health_score: Value,
    analysis: String,
    suggested_next_steps: Vec<String>,
}

fn health_score(value: &Value) -> Result<u8, GenerationError> {
    // Integral floats such as 72.0 are accepted; 72.5 is not
    let score = match value.as_u64() {
        Some(score) => score,
        None => match value.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= 0.0 => f as u64,
            _ => return Err(invalid(format!("healthScore {value} is not a non-negative integer"))),
        },
    };
    if score > u64::from(MAX_HEALTH_SCORE) {
        return Err(invalid(format!("healthScore {score} is outside 0..=100")));
    }
    Ok(score as u8)
}

/// Validate a deal-health response
pub fn parse_health(text: &str) -> Result<DealHealth, GenerationError> {
    let raw: RawHealth = decode(text)?;
    let health_score = health_score(&raw.health_score)?;
    if raw.analysis.trim().is_empty() {
        return Err(invalid("analysis is blank"));
    }
    let suggested_next_steps: Vec<String> = raw
        .suggested_next_steps
        .into_iter()
        .map(|step| step.trim().to_string())
        .filter(|step| !step.is_empty())
        .collect();
    Ok(DealHealth { health_score, analysis: raw.analysis, suggested_next_steps })
}

/* -------------------------------------------------------------------------- */
/* Activity Summary */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Deserialize)]
struct RawActivitySummary {
    summary: String,
    #[serde(rename = "type")]
    activity_type: String,
    next_action: String,
    due_date: String,
    #[serde(default)]
    suggested_phase: Option<String>,
}

fn suggested_stage(value: Option<&str>) -> Result<Option<DealStage>, GenerationError> {
    let Some(text) = value.map(str::trim) else {
        return Ok(None);
    };
    if text.is_empty() || text.eq_ignore_ascii_case("none") || text.eq_ignore_ascii_case("null") {
        return Ok(None);
    }
    DealStage::from_str(text).map(Some).map_err(|_| invalid(format!("unknown stage '{text}'")))
}

/// Validate an activity-summary response
pub fn parse_activity_summary(text: &str) -> Result<ActivitySummary, GenerationError> {
    let raw: RawActivitySummary = decode(text)?;

    if raw.summary.trim().is_empty() {
        return Err(invalid("summary is blank"));
    }
    let activity_type = ActivityType::from_str(&raw.activity_type)
        .map_err(|_| invalid(format!("unknown activity type '{}'", raw.activity_type)))?;
    let due_date = NaiveDate::parse_from_str(raw.due_date.trim(), "%Y-%m-%d")
        .map_err(|_| invalid(format!("due_date '{}' is not YYYY-MM-DD", raw.due_date)))?;
    let suggested_stage = suggested_stage(raw.suggested_phase.as_deref())?;

    Ok(ActivitySummary {
        summary: raw.summary.trim().to_string(),
        activity_type,
        next_action: raw.next_action.trim().to_string(),
        due_date,
        suggested_stage,
    })
}
