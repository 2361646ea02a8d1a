/// Gemini API client implementing the `TextGenerator` port
use asnalo_core::{GenerationRequest, ModelTier, OutputShape, TextGenerator};
use asnalo_domain::{GatewayConfig, GenerationError, SfaError};
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

use crate::errors::InfraError;
use crate::http::HttpClient;

use super::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

const API_VERSION: &str = "v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Gemini API client
///
/// Without a credential every call fails fast with
/// [`GenerationError::MissingCredential`] and no request is sent.
pub struct GeminiClient {
    http_client: HttpClient,
    api_key: Option<String>,
    base_url: String,
    fast_model: String,
    deep_model: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the default base URL and models
    pub fn new(api_key: Option<String>, http_client: HttpClient) -> Self {
        let defaults = GatewayConfig::default();
        Self {
            http_client,
            api_key,
            base_url: defaults.base_url,
            fast_model: defaults.fast_model,
            deep_model: defaults.deep_model,
        }
    }

    /// Create a client from the gateway settings
    pub fn from_config(config: &GatewayConfig) -> Result<Self, SfaError> {
        let http_client = HttpClient::from_config(config)?;
        Ok(Self::new(config.api_key.clone(), http_client)
            .with_base_url(config.base_url.clone())
            .with_models(config.fast_model.clone(), config.deep_model.clone()))
    }

    /// Override the model ids used for each tier
    pub fn with_models(mut self, fast: impl Into<String>, deep: impl Into<String>) -> Self {
        self.fast_model = fast.into();
        self.deep_model = deep.into();
        self
    }

    /// Override the service base URL (proxies, tests)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast_model,
            ModelTier::Deep => &self.deep_model,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}/models/{}:generateContent", self.base_url, API_VERSION, model)
    }

    fn build_body(request: GenerationRequest) -> GenerateContentRequest {
        let generation_config = match request.output {
            OutputShape::FreeText => None,
            OutputShape::Json { schema, .. } => Some(GenerationConfig {
                response_mime_type: JSON_MIME_TYPE.to_string(),
                response_schema: schema,
            }),
        };

        GenerateContentRequest {
            contents: vec![Content::user(request.prompt)],
            system_instruction: request.system_instruction.map(Content::system),
            generation_config,
        }
    }

    /// Call the `generateContent` endpoint
    async fn call_api(
        &self,
        api_key: &str,
        request: GenerationRequest,
    ) -> Result<String, GenerationError> {
        let model = self.model_for(request.tier).to_string();
        let schema_name = match &request.output {
            OutputShape::FreeText => None,
            OutputShape::Json { name, .. } => Some(*name),
        };
        let body = Self::build_body(request);

        info!(model = %model, schema = ?schema_name, "Sending Gemini generation request");

        let request_builder = self
            .http_client
            .request(Method::POST, self.endpoint(&model))
            .header(API_KEY_HEADER, api_key)
            .header("Content-Type", JSON_MIME_TYPE)
            .json(&body);

        let response = self
            .http_client
            .send(request_builder)
            .await
            .map_err(|err| GenerationError::from(InfraError::from(err)))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received Gemini API response");

        if !status.is_success() {
            return Err(self.handle_error_status(status.as_u16(), response).await);
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerationError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                completion_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Gemini token usage"
            );
        }

        let text = parsed.text();
        if text.trim().is_empty() {
            debug!(finish_reason = ?parsed.finish_reason(), "Gemini returned no text");
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }

    /// Handle HTTP error status codes
    async fn handle_error_status(
        &self,
        status: u16,
        response: reqwest::Response,
    ) -> GenerationError {
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            401 | 403 => GenerationError::Authentication(format!("Invalid API key ({})", status)),
            429 => GenerationError::RateLimit(retry_after),
            _ => GenerationError::Api { status, message },
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GenerationError::MissingCredential);
        };
        self.call_api(api_key, request).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_client(base_url: String) -> GeminiClient {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("http client");

        GeminiClient::new(Some("test-api-key".to_string()), http_client)
            .with_base_url(base_url)
            .with_models("flash-test", "pro-test")
    }

    fn text_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 3,
                "totalTokenCount": 15
            }
        }))
    }

    #[tokio::test]
    async fn sends_free_text_request_to_fast_model() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/flash-test:generateContent"))
            .and(header("x-goog-api-key", "test-api-key"))
            .and(body_partial_json(json!({
                "contents": [{ "role": "user", "parts": [{ "text": "Write an email" }] }],
                "systemInstruction": { "parts": [{ "text": "Be warm" }] }
            })))
            .respond_with(text_response("Subject: Hello"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let request = GenerationRequest::text(ModelTier::Fast, "Write an email")
            .with_system_instruction("Be warm");

        let text = client.generate(request).await.expect("should generate");
        assert_eq!(text, "Subject: Hello");
    }

    #[tokio::test]
    async fn sends_schema_for_json_requests_to_deep_model() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/pro-test:generateContent"))
            .and(body_partial_json(json!({
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "type": "OBJECT" }
                }
            })))
            .respond_with(text_response(r#"{"healthScore": 50}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let request =
            GenerationRequest::json(
                ModelTier::Deep,
                "Assess",
                "deal_health",
                json!({ "type": "OBJECT" }),
            );

        let text = client.generate(request).await.expect("should generate");
        assert_eq!(text, r#"{"healthScore": 50}"#);
    }

    #[tokio::test]
    async fn handles_authentication_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let result = client.generate(GenerationRequest::text(ModelTier::Fast, "hi")).await;

        assert!(matches!(result, Err(GenerationError::Authentication(_))));
    }

    #[tokio::test]
    async fn handles_rate_limit_with_retry_after() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "12"))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let result = client.generate(GenerationRequest::text(ModelTier::Fast, "hi")).await;

        assert_eq!(result, Err(GenerationError::RateLimit(12)));
    }

    #[tokio::test]
    async fn handles_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let result = client.generate(GenerationRequest::text(ModelTier::Deep, "hi")).await;

        match result {
            Err(GenerationError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("backend unavailable"));
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn handles_empty_candidates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let result = client.generate(GenerationRequest::text(ModelTier::Fast, "hi")).await;

        assert_eq!(result, Err(GenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn handles_non_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let result = client.generate(GenerationRequest::text(ModelTier::Fast, "hi")).await;

        assert!(matches!(result, Err(GenerationError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn missing_credential_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(text_response("unused"))
            .expect(0)
            .mount(&mock_server)
            .await;

        let http_client = HttpClient::new().expect("http client");
        let client = GeminiClient::new(None, http_client).with_base_url(mock_server.uri());

        assert!(!client.has_credential());
        let result = client.generate(GenerationRequest::text(ModelTier::Fast, "hi")).await;
        assert_eq!(result, Err(GenerationError::MissingCredential));
    }

    #[test]
    fn builds_endpoint_from_trimmed_base_url() {
        let http_client = HttpClient::new().expect("http client");
        let client = GeminiClient::new(None, http_client).with_base_url("http://localhost:8080/");
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(client.model_for(ModelTier::Deep), "gemini-2.5-pro");
    }
}
