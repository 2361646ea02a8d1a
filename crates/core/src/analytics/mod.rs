//! Pipeline metrics domain

pub mod derivations;

pub use derivations::*;
