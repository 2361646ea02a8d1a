//! Sales assistant service - generation calls with fixed fallbacks

use std::sync::Arc;
use std::time::Instant;

use asnalo_domain::constants::{DEFAULT_FOLLOW_UP_INTENT, EMAIL_DRAFT_FALLBACK, REPORT_FALLBACK};
use asnalo_domain::{ActivitySummary, Client, Deal, DealHealth, GenerationError};
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::contract;
use super::ports::{GenerationRequest, ModelTier, TextGenerator};
use super::prompts;

/// Sales assistant
///
/// Wraps a [`TextGenerator`] and never surfaces its failures: every operation
/// logs the error and returns the operation's documented fallback. None of the
/// operations touch the record store; callers decide what to merge.
#[derive(Clone)]
pub struct SalesAssistant {
    generator: Arc<dyn TextGenerator>,
}

impl SalesAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    async fn run<T>(
        &self,
        operation: &'static str,
        request: GenerationRequest,
        parse: impl FnOnce(String) -> Result<T, GenerationError>,
    ) -> Result<T, GenerationError> {
        let start = Instant::now();
        let result = self.generator.generate(request).await.and_then(parse);
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => debug!(operation, elapsed_ms, "generation succeeded"),
            Err(err) => warn!(
                operation,
                elapsed_ms,
                error_type = err.label(),
                error = %err,
                "generation failed, using fallback"
            ),
        }
        result
    }

    /// Draft a follow-up email (subject line and body) for a deal
    ///
    /// A blank intent is replaced by a generic follow-up intent.
    pub async fn draft_follow_up_email(
        &self,
        deal: &Deal,
        client: &Client,
        intent: &str,
    ) -> String {
        let intent = match intent.trim() {
            "" => DEFAULT_FOLLOW_UP_INTENT,
            trimmed => trimmed,
        };
        let request =
            GenerationRequest::text(ModelTier::Fast, prompts::email_prompt(deal, client, intent))
                .with_system_instruction(prompts::EMAIL_SYSTEM_INSTRUCTION);

        self.run("draft_follow_up_email", request, contract::parse_text)
            .await
            .unwrap_or_else(|_| EMAIL_DRAFT_FALLBACK.to_string())
    }

    /// Score a deal's health from its record and activity history
    pub async fn assess_deal_health(&self, deal: &Deal, client: &Client) -> DealHealth {
        let request = GenerationRequest::json(
            ModelTier::Deep,
            prompts::health_prompt(deal, client),
            contract::HEALTH_SCHEMA_NAME,
            contract::health_schema(),
        );

        self.run("assess_deal_health", request, |text| contract::parse_health(&text))
            .await
            .unwrap_or_else(|_| DealHealth::fallback())
    }

    /// Turn a raw activity note into a structured activity
    ///
    /// Returns `None` without calling the generation service when the note is
    /// blank, and `None` on any failure. `today` anchors relative due dates.
    pub async fn summarize_activity_note(
        &self,
        note: &str,
        deal: &Deal,
        today: NaiveDate,
    ) -> Option<ActivitySummary> {
        if note.trim().is_empty() {
            debug!(deal_id = %deal.id, "blank activity note, skipping generation");
            return None;
        }
        let request = GenerationRequest::json(
            ModelTier::Fast,
            prompts::note_prompt(note, deal, today),
            contract::ACTIVITY_SUMMARY_SCHEMA_NAME,
            contract::activity_summary_schema(),
        )
        .with_system_instruction(prompts::NOTE_SYSTEM_INSTRUCTION);

        self.run("summarize_activity_note", request, |text| contract::parse_activity_summary(&text))
            .await
            .ok()
    }

    /// Write a markdown executive summary of the whole pipeline
    pub async fn generate_pipeline_report(&self, deals: &[Deal]) -> String {
        let prompt = match prompts::report_prompt(deals) {
            Ok(prompt) => prompt,
            Err(err) => {
                warn!(error = %err, "failed to serialize deal digest");
                return REPORT_FALLBACK.to_string();
            }
        };
        let request = GenerationRequest::text(ModelTier::Deep, prompt);

        self.run("generate_pipeline_report", request, contract::parse_text)
            .await
            .unwrap_or_else(|_| REPORT_FALLBACK.to_string())
    }
}

impl std::fmt::Debug for SalesAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesAssistant").finish_non_exhaustive()
    }
}
