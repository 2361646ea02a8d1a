#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use asnalo_core::{GenerationRequest, TextGenerator};
use asnalo_domain::{Config, GenerationError};
use asnalo_lib::context::AppContext;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Fixed session date: seed deals d1 and d2 close in June 2024.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 11).expect("valid date")
}

/// Generator that replays queued responses and records what it was asked.
///
/// Answers with a network error once the queue is empty.
#[derive(Clone, Default)]
pub struct CannedGenerator {
    responses: Arc<Mutex<VecDeque<Result<String, GenerationError>>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl CannedGenerator {
    pub fn respond(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
        self
    }

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
impl TextGenerator for CannedGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Network("no canned response".into())))
    }
}

/// Context over seed records with a canned generator
pub fn context_with(generator: &CannedGenerator) -> AppContext {
    AppContext::with_generator(Config::default(), Arc::new(generator.clone()), today())
}

/// Context whose generator always fails
pub fn context() -> AppContext {
    context_with(&CannedGenerator::default())
}
