//! Shared helpers for `asnalo-infra` integration tests.

#![allow(dead_code)]

use std::time::Duration;

use asnalo_infra::{GeminiClient, HttpClient};
use serde_json::json;
use wiremock::ResponseTemplate;

pub const TEST_API_KEY: &str = "integration-test-key";
pub const FAST_MODEL: &str = "flash-it";
pub const DEEP_MODEL: &str = "pro-it";

/// Gemini client pointed at a mock server with a short timeout.
pub fn gemini_client(base_url: &str) -> GeminiClient {
    let http_client = HttpClient::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("http client");

    GeminiClient::new(Some(TEST_API_KEY.to_string()), http_client)
        .with_base_url(base_url)
        .with_models(FAST_MODEL, DEEP_MODEL)
}

/// `generateContent` success body carrying `text` as the only part.
pub fn gemini_text(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 100,
            "candidatesTokenCount": 20,
            "totalTokenCount": 120
        }
    }))
}

pub fn model_path(model: &str) -> String {
    format!("/v1beta/models/{model}:generateContent")
}
