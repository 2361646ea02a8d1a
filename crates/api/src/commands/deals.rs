//! Deal detail commands
//!
//! The detail view shows one deal with its client and offers the three
//! per-deal assistant actions. Assistant results are returned to the caller
//! untouched; only [`accept_activity_summary`] and [`add_activity`] write to
//! the store.

use asnalo_core::{apply_activity_summary, new_activity_id, Action};
use asnalo_domain::{
    Activity, ActivitySummary, ActivityType, Client, Deal, DealHealth, Result, SfaError,
};
use serde::{Deserialize, Serialize};
use tracing::info;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_command, execute_command_async};

/// A deal with the client it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DealDetail {
    pub deal: Deal,
    pub client: Option<Client>,
}

fn deal_not_found(deal_id: &str) -> SfaError {
    SfaError::NotFound(format!("deal {deal_id}"))
}

fn load_detail(ctx: &AppContext, deal_id: &str) -> Result<DealDetail> {
    ctx.read(|store| {
        store.deal(deal_id).map(|deal| DealDetail {
            deal: deal.clone(),
            client: store.client(&deal.client_id).cloned(),
        })
    })
    .ok_or_else(|| deal_not_found(deal_id))
}

/// Deal and client for the assistant calls, which need both
fn load_deal_and_client(ctx: &AppContext, deal_id: &str) -> Result<(Deal, Client)> {
    let DealDetail { deal, client } = load_detail(ctx, deal_id)?;
    let client = client.ok_or_else(|| {
        SfaError::NotFound(format!("client {} for deal {deal_id}", deal.client_id))
    })?;
    Ok((deal, client))
}

pub fn get_deal_detail(ctx: &AppContext, deal_id: &str) -> Result<DealDetail> {
    execute_command("deals::get_deal_detail", || load_detail(ctx, deal_id))
}

/// Select a deal and return its detail
pub fn open_deal(ctx: &AppContext, deal_id: &str) -> Result<DealDetail> {
    execute_command("deals::open_deal", || {
        let detail = load_detail(ctx, deal_id)?;
        ctx.dispatch(Action::SelectDeal(Some(deal_id.to_string())));
        Ok(detail)
    })
}

/// Clear the selection. Returns whether a deal was open.
pub fn close_deal(ctx: &AppContext) -> Result<bool> {
    execute_command("deals::close_deal", || Ok(ctx.dispatch(Action::SelectDeal(None))))
}

/// Deal currently open in the detail view, if any
pub fn selected_deal(ctx: &AppContext) -> Result<Option<DealDetail>> {
    execute_command("deals::selected_deal", || {
        match ctx.read(|store| store.selected_deal().map(|deal| deal.id.clone())) {
            Some(deal_id) => load_detail(ctx, &deal_id).map(Some),
            None => Ok(None),
        }
    })
}

/* -------------------------------------------------------------------------- */
/* Assistant Actions */
/* -------------------------------------------------------------------------- */

/// Draft a follow-up email. Generation failures yield the fallback text.
pub async fn draft_follow_up_email(
    ctx: &AppContext,
    deal_id: &str,
    intent: &str,
) -> Result<String> {
    execute_command_async("deals::draft_follow_up_email", || async move {
        let (deal, client) = load_deal_and_client(ctx, deal_id)?;
        Ok(ctx.assistant().draft_follow_up_email(&deal, &client, intent).await)
    })
    .await
}

/// Score the deal's health. Generation failures yield the fallback record.
pub async fn analyze_deal_health(ctx: &AppContext, deal_id: &str) -> Result<DealHealth> {
    execute_command_async("deals::analyze_deal_health", || async move {
        let (deal, client) = load_deal_and_client(ctx, deal_id)?;
        Ok(ctx.assistant().assess_deal_health(&deal, &client).await)
    })
    .await
}

/// Structure a raw note for review
///
/// `Ok(None)` means nothing was produced (blank note or failed generation)
/// and there is nothing to accept. The store is not touched.
pub async fn summarize_activity_note(
    ctx: &AppContext,
    deal_id: &str,
    note: &str,
) -> Result<Option<ActivitySummary>> {
    execute_command_async("deals::summarize_activity_note", || async move {
        let deal = ctx
            .read(|store| store.deal(deal_id).cloned())
            .ok_or_else(|| deal_not_found(deal_id))?;
        Ok(ctx.assistant().summarize_activity_note(note, &deal, ctx.today()).await)
    })
    .await
}

/// Merge a reviewed activity summary into the deal and store it
///
/// The summary is applied to the deal as stored now, not as it was when the
/// note was summarized.
pub fn accept_activity_summary(
    ctx: &AppContext,
    deal_id: &str,
    summary: &ActivitySummary,
) -> Result<Deal> {
    execute_command("deals::accept_activity_summary", || {
        let current =
            ctx.read(|store| store.deal(deal_id).cloned()).ok_or_else(|| deal_not_found(deal_id))?;
        let updated = apply_activity_summary(&current, summary, ctx.today(), new_activity_id());
        store_update(ctx, updated)
    })
}

/// Log an activity entered by hand, newest first
pub fn add_activity(
    ctx: &AppContext,
    deal_id: &str,
    activity_type: ActivityType,
    content: &str,
) -> Result<Deal> {
    execute_command("deals::add_activity", || {
        let content = content.trim();
        if content.is_empty() {
            return Err(SfaError::InvalidInput("activity content is blank".into()));
        }
        let current =
            ctx.read(|store| store.deal(deal_id).cloned()).ok_or_else(|| deal_not_found(deal_id))?;

        let mut activities = Vec::with_capacity(current.activities.len() + 1);
        activities.push(Activity {
            id: new_activity_id(),
            activity_type,
            date: ctx.today(),
            content: content.to_string(),
        });
        activities.extend(current.activities.iter().cloned());

        store_update(ctx, Deal { activities, ..current })
    })
}

fn store_update(ctx: &AppContext, updated: Deal) -> Result<Deal> {
    updated.validate()?;
    let deal_id = updated.id.clone();
    ctx.dispatch(Action::UpdateDeal(updated.clone()));
    info!(
        deal_id = %deal_id,
        stage = %updated.stage,
        activities = updated.activities.len(),
        "deal updated"
    );
    Ok(updated)
}
