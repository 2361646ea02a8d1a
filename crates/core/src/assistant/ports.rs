//! Port interface for the external text-generation service

use async_trait::async_trait;
use asnalo_domain::GenerationError;
use serde_json::Value;

/// Which model family serves a request
///
/// Adapters map tiers to concrete model ids from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelTier {
    /// Short drafting and extraction work
    Fast,
    /// Multi-factor analysis and long-form reports
    Deep,
}

/// Shape the response must take
#[derive(Debug, Clone, PartialEq)]
pub enum OutputShape {
    FreeText,
    /// JSON constrained by an OpenAPI-style schema object
    Json { name: &'static str, schema: Value },
}

/// One generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub tier: ModelTier,
    pub system_instruction: Option<String>,
    pub prompt: String,
    pub output: OutputShape,
}

impl GenerationRequest {
    pub fn text(tier: ModelTier, prompt: impl Into<String>) -> Self {
        Self {
            tier,
            system_instruction: None,
            prompt: prompt.into(),
            output: OutputShape::FreeText,
        }
    }

    pub fn json(
        tier: ModelTier,
        prompt: impl Into<String>,
        name: &'static str,
        schema: Value,
    ) -> Self {
        Self {
            tier,
            system_instruction: None,
            prompt: prompt.into(),
            output: OutputShape::Json { name, schema },
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn expects_json(&self) -> bool {
        matches!(self.output, OutputShape::Json { .. })
    }
}

/// Trait for sending prompts to a text-generation service
///
/// Implementations return the raw response text. Shape validation happens in
/// [`crate::assistant::contract`], not in the adapter.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}
