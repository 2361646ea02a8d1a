//! Sales assistant: prompts, response contract, and the generation port

pub mod contract;
pub mod ports;
pub mod prompts;
pub mod service;

pub use service::SalesAssistant;
