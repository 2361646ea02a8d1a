//! # Asnalo Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Pipeline metrics derived from the deal collection
//! - The record store and its single update channel
//! - The sales assistant: generation port, prompts, response contract
//!
//! ## Architecture Principles
//! - Only depends on `asnalo-domain`
//! - No HTTP, environment, or platform code
//! - The generation service is reached through the `TextGenerator` trait
//! - Pure, testable business logic

pub mod analytics;
pub mod assistant;
pub mod store;

// Re-export specific items to avoid ambiguity
pub use assistant::ports::{GenerationRequest, ModelTier, OutputShape, TextGenerator};
pub use assistant::SalesAssistant;
pub use store::{apply_activity_summary, new_activity_id, reduce, Action, AppState, Store, View};
