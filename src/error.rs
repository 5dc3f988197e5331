use thiserror::Error;

/// Unified error type for the triage core.
///
/// Admission-control rejection is deliberately NOT an error: a rejected
/// request is a normal outcome ([`crate::analyzer::AnalysisOutcome::Rejected`])
/// that the HTTP layer maps to a too-many-requests response class. Only
/// caller mistakes and remote failures surface here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Remote analyzer error: {message}")]
    Remote { message: String },
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation {
            message: msg.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Error::Remote {
            message: msg.into(),
        }
    }
}
