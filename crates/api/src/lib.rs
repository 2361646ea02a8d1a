//! # Asnalo App
//!
//! Application layer - commands and main entry point.
//!
//! This crate contains:
//! - Commands (presentation layer → backend bridge)
//! - Application context (dependency injection)
//! - Logging setup and command helpers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the Gemini adapter into the sales assistant
//! - Owns the single record store instance

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
