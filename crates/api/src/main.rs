//! Asnalo - sales pipeline dashboard
//!
//! Main entry point. Builds the application context and prints the dashboard
//! and pipeline board as JSON for the presentation shell.

use anyhow::Context;
use asnalo_lib::utils::logging::{self, ConfigSummary};
use asnalo_lib::{get_dashboard, get_pipeline_board, AppContext};
use serde_json::json;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the config so the credential can come from it
    let dotenv = dotenvy::dotenv();

    let config = asnalo_infra::config::load().context("failed to load configuration")?;
    logging::init(&config.logging).context("failed to initialise logging")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "could not load .env file"),
    }
    ConfigSummary::new(&config, asnalo_infra::config::find_config_file()).log();

    info!("Asnalo starting...");
    let ctx = AppContext::with_config(config, chrono::Local::now().date_naive())
        .context("failed to build application context")?;

    let dashboard = get_dashboard(&ctx, ctx.today())?;
    let board = get_pipeline_board(&ctx)?;
    let snapshot = json!({ "dashboard": dashboard, "pipeline": board });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    info!("Asnalo initialized successfully");
    Ok(())
}
