//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Generation service defaults
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_FAST_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_DEEP_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Assistant fallbacks (returned verbatim when the generation service fails)
pub const EMAIL_DRAFT_FALLBACK: &str =
    "Error: the email draft could not be generated. Please check the API key configuration.";
pub const HEALTH_FALLBACK_ANALYSIS: &str =
    "Analysis failed. Please check the API key or the network connection.";
pub const HEALTH_FALLBACK_NEXT_STEP: &str = "Re-check the API settings";
pub const REPORT_FALLBACK: &str = "An error occurred while analysing the pipeline.";

// Assistant inputs
pub const DEFAULT_FOLLOW_UP_INTENT: &str =
    "Follow up on our previous conversation and arrange the next demo";
pub const MAX_HEALTH_SCORE: u8 = 100;
pub const MAX_PROBABILITY: u8 = 100;
