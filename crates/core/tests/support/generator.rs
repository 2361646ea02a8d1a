//! Scripted `TextGenerator` for assistant tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use asnalo_core::{GenerationRequest, TextGenerator};
use asnalo_domain::GenerationError;
use async_trait::async_trait;

/// In-memory mock for `TextGenerator`.
///
/// Replays queued responses in order and records every request it receives.
/// When the queue is empty it answers with `fallback_error`.
#[derive(Clone)]
pub struct ScriptedGenerator {
    responses: Arc<Mutex<VecDeque<Result<String, GenerationError>>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
    fallback_error: GenerationError,
}

impl Default for ScriptedGenerator {
    fn default() -> Self {
        Self {
            responses: Arc::default(),
            requests: Arc::default(),
            fallback_error: GenerationError::Network("no scripted response".into()),
        }
    }
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn respond(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queue a failure
    pub fn fail(self, error: GenerationError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(self.fallback_error.clone()))
    }
}
