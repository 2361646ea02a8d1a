//! # Asnalo Domain
//!
//! Business domain types and models for the Asnalo sales pipeline.
//!
//! This crate contains:
//! - Pipeline records (Client, Deal, Activity) and their closed enumerations
//! - Aggregate row types produced by the metrics layer
//! - Assistant result types (deal health, structured activity summaries)
//! - Domain error types and Result definitions
//! - Configuration structures and domain constants
//!
//! ## Architecture
//! - No dependencies on other Asnalo crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::format::format_yen;
