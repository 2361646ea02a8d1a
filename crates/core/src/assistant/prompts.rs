//! Prompt builders for the sales assistant
//!
//! Prompts only carry the fields each operation needs. The pipeline report
//! reduces every deal to a compact digest to bound prompt size.

use asnalo_domain::{format_yen, ActivityType, Client, Deal, DealStage};
use chrono::NaiveDate;
use serde::Serialize;

pub const EMAIL_SYSTEM_INSTRUCTION: &str = "You are an experienced sales copywriter. Tone: \
     professional and warm, and always ends with a clear call to action.";

pub const NOTE_SYSTEM_INSTRUCTION: &str =
    "You are a sales CRM assistant that turns rough activity notes into structured records.";

pub fn email_prompt(deal: &Deal, client: &Client, intent: &str) -> String {
    format!(
        "Context:\n\
         You are a professional sales assistant.\n\
         Customer: {name} ({role}) at {company}\n\
         Deal: \"{title}\" (amount: {amount})\n\
         Current stage: {stage}\n\
         Intent: {intent}\n\n\
         Task:\n\
         Write a concise, persuasive business email to the customer that fulfils the intent.\n\
         Include a subject line.",
        name = client.name,
        role = client.role,
        company = client.company,
        title = deal.title,
        amount = format_yen(deal.amount),
        stage = deal.stage.label(),
    )
}

/// One line per logged activity, newest first as stored
fn activity_log(deal: &Deal) -> String {
    if deal.activities.is_empty() {
        return "(no activities logged)".to_string();
    }
    deal.activities
        .iter()
        .map(|activity| {
            format!(
                "- {} [{}]: {}",
                activity.date,
                activity.activity_type.label(),
                activity.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn health_prompt(deal: &Deal, client: &Client) -> String {
    format!(
        "Analyse the following sales deal from several angles and give advice that raises the \
         chance of closing it.\n\n\
         Customer: {company} (contact: {name})\n\
         Deal: {title} (amount: {amount})\n\
         Stage: {stage}\n\
         Probability: {probability}%\n\
         Expected close date: {close}\n\
         Notes: {notes}\n\n\
         Recent activity log:\n{log}\n\n\
         Respond with JSON:\n\
         {{\n\
         \x20 \"healthScore\": integer 0-100,\n\
         \x20 \"analysis\": \"reasoning behind the score, risks, current situation\",\n\
         \x20 \"suggestedNextSteps\": [\"action 1\", \"action 2\", \"action 3\"]\n\
         }}",
        company = client.company,
        name = client.name,
        title = deal.title,
        amount = format_yen(deal.amount),
        stage = deal.stage.label(),
        probability = deal.probability,
        close = deal.expected_close_date,
        notes = deal.notes,
        log = activity_log(deal),
    )
}

pub fn note_prompt(note: &str, deal: &Deal, today: NaiveDate) -> String {
    let types = ActivityType::ALL.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ");
    let stages = DealStage::ALL.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ");
    format!(
        "Extract and organise the information in the following activity note written by a sales \
         rep.\n\n\
         Deal: {title}\n\
         Current stage: {stage}\n\
         Today: {today}\n\n\
         Note:\n\"{note}\"\n\n\
         Respond with JSON:\n\
         {{\n\
         \x20 \"summary\": \"short business summary of the activity\",\n\
         \x20 \"type\": one of {types},\n\
         \x20 \"next_action\": \"the concrete next action\",\n\
         \x20 \"due_date\": \"YYYY-MM-DD\",\n\
         \x20 \"suggested_phase\": one of {stages}, or \"none\" when no change is needed\n\
         }}",
        title = deal.title,
        stage = deal.stage,
        note = note.trim(),
    )
}

/// Compact per-deal record sent with the pipeline report prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealDigest<'a> {
    pub title: &'a str,
    pub amount: u64,
    pub gross_profit: u64,
    pub stage: DealStage,
    pub probability: u8,
    pub close_date: NaiveDate,
    pub activity_count: usize,
}

impl<'a> From<&'a Deal> for DealDigest<'a> {
    fn from(deal: &'a Deal) -> Self {
        Self {
            title: &deal.title,
            amount: deal.amount,
            gross_profit: deal.gross_profit,
            stage: deal.stage,
            probability: deal.probability,
            close_date: deal.expected_close_date,
            activity_count: deal.activities.len(),
        }
    }
}

pub fn report_prompt(deals: &[Deal]) -> Result<String, serde_json::Error> {
    let digest: Vec<DealDigest<'_>> = deals.iter().map(DealDigest::from).collect();
    let data = serde_json::to_string_pretty(&digest)?;
    Ok(format!(
        "Write an executive summary of the current sales situation \
         based on the deal data below.\n\n\
         Data:\n{data}\n\n\
         Requirements:\n\
         1. Summarise the overall pipeline.\n\
         2. Point out high-risk deals and deals likely to close early.\n\
         3. Give concrete strategic advice for reaching the revenue target.\n\n\
         Format the output as well-structured markdown."
    ))
}
