//! Record store: state, actions, and record update helpers

pub mod state;

use asnalo_domain::{Activity, ActivitySummary, Deal};
use chrono::NaiveDate;
use uuid::Uuid;

pub use state::{reduce, Action, AppState, Store, View};

/// Fresh, time-ordered identifier for a new activity
pub fn new_activity_id() -> String {
    Uuid::now_v7().to_string()
}

/// Build the updated deal for an accepted activity summary
///
/// The new activity is prepended (activities are kept newest first), the
/// next action is overwritten, and the stage changes only when the summary
/// suggests one that differs from the current stage. The input is untouched;
/// callers apply the result with [`Action::UpdateDeal`].
pub fn apply_activity_summary(
    deal: &Deal,
    summary: &ActivitySummary,
    today: NaiveDate,
    activity_id: impl Into<String>,
) -> Deal {
    let activity = Activity {
        id: activity_id.into(),
        activity_type: summary.activity_type,
        date: today,
        content: summary.summary.clone(),
    };

    let mut activities = Vec::with_capacity(deal.activities.len() + 1);
    activities.push(activity);
    activities.extend(deal.activities.iter().cloned());

    let stage = match summary.suggested_stage {
        Some(suggested) if suggested != deal.stage => suggested,
        _ => deal.stage,
    };

    Deal {
        activities,
        next_action: Some(summary.next_action.clone()),
        next_action_date: Some(summary.due_date),
        stage,
        ..deal.clone()
    }
}
