//! Commands invoked by the presentation layer
//!
//! Each command takes the shared [`AppContext`](crate::context::AppContext),
//! is timed and logged through the command helpers, and returns a
//! `Result<_, SfaError>`. Unknown record ids surface as `SfaError::NotFound`;
//! assistant failures never do, they resolve to fallbacks.

pub mod clients;
pub mod dashboard;
pub mod deals;
pub mod navigation;
pub mod pipeline;
pub mod reports;

pub use clients::{get_client, list_clients};
pub use dashboard::{get_dashboard, DashboardView};
pub use deals::{
    accept_activity_summary, add_activity, analyze_deal_health, close_deal,
    draft_follow_up_email, get_deal_detail, open_deal, selected_deal, summarize_activity_note,
    DealDetail,
};
pub use navigation::{current_view, navigate};
pub use pipeline::{
    advance_deal_stage, get_pipeline_board, move_deal_stage, DealCard, PipelineColumn,
};
pub use reports::{generate_pipeline_report, get_reports, ReportsView};
