/// Gemini integration for the sales assistant
///
/// This module provides a Gemini API client that implements the core
/// `TextGenerator` port.
///
/// # Architecture
///
/// - **Client**: `GeminiClient` - HTTP client wrapper for `generateContent`
/// - **Types**: Request/response wire types
/// - **Error Handling**: Status codes map onto `GenerationError`
///
/// # Usage
///
/// ```no_run
/// use asnalo_core::{GenerationRequest, ModelTier, TextGenerator};
/// use asnalo_domain::GatewayConfig;
/// use asnalo_infra::integrations::gemini::GeminiClient;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GatewayConfig {
///     api_key: std::env::var("GEMINI_API_KEY").ok(),
///     ..Default::default()
/// };
/// let client = GeminiClient::from_config(&config)?;
///
/// let text = client
///     .generate(GenerationRequest::text(ModelTier::Fast, "Write a short greeting"))
///     .await?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
///
/// # API Integration
///
/// - Endpoint: `POST {base_url}/v1beta/models/{model}:generateContent`
/// - Credential: `x-goog-api-key` header
/// - Structured output: `generationConfig.responseMimeType = application/json`
///   with a `responseSchema`
///
/// # Error Handling
///
/// - **401/403**: `Authentication`
/// - **429**: `RateLimit` (honours `Retry-After`, default 60s)
/// - **Other non-success**: `Api { status, message }`
/// - **No candidate text**: `EmptyResponse`
pub mod client;
pub(crate) mod types;

pub use client::GeminiClient;
