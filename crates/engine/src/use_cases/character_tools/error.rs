//! Tool call errors.

use expertgm_domain::DomainError;

/// Errors that can occur while running a tool call.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Bad request: {0}")]
    BadRequest(#[from] serde_json::Error),

    #[error("Failed to serialize character: {0}")]
    Snapshot(#[source] serde_json::Error),
}

impl ToolError {
    /// Stable category for responses and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::InvalidArgument(_)) => "invalid_argument",
            Self::Domain(DomainError::NotInitialized(_)) => "not_initialized",
            Self::Domain(DomainError::Parse(_)) => "parse",
            Self::BadRequest(_) => "bad_request",
            Self::Snapshot(_) => "internal",
        }
    }
}
