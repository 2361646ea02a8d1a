//! # Asnalo Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client implementation
//! - The Gemini text-generation adapter
//! - Configuration loading (files and environment)
//! - Seed records loaded at startup
//!
//! ## Architecture
//! - Implements traits defined in `asnalo-core`
//! - Depends on `asnalo-domain` and `asnalo-core`
//! - Contains all "impure" code (I/O, network, environment)

pub mod config;
pub mod errors;
pub mod fixtures;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::*;
pub use integrations::*;
