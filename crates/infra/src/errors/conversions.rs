//! Conversions from external infrastructure errors into domain errors.

use asnalo_domain::{GenerationError, SfaError};
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SfaError);

impl From<InfraError> for SfaError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SfaError> for InfraError {
    fn from(value: SfaError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSfaError {
    fn into_sfa(self) -> SfaError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SfaError */
/* -------------------------------------------------------------------------- */

impl IntoSfaError for HttpError {
    fn into_sfa(self) -> SfaError {
        if self.is_timeout() {
            return SfaError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return SfaError::Network("HTTP connection failure".into());
        }

        SfaError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_sfa())
    }
}

/* -------------------------------------------------------------------------- */
/* InfraError → GenerationError */
/* -------------------------------------------------------------------------- */

impl From<InfraError> for GenerationError {
    fn from(value: InfraError) -> Self {
        match value.0 {
            SfaError::Network(msg) => GenerationError::Network(msg),
            other => GenerationError::Network(format!("HTTP error: {}", other)),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
