use thiserror::Error;

/// Failure of a single call against the travel API.
/// All variants carry a human-readable message for display/logging.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    // ── Transport errors ─────────────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not build request: {0}")]
    Request(String),

    #[error("Response was not valid JSON: {0}")]
    MalformedBody(String),

    // ── Server errors ────────────────────────────────────────────────────────
    #[error("Server error: {0}")]
    Status(u16),

    /// The backend answered with an `{ "error": ... }` body.
    #[error("{0}")]
    Application(String),

    /// Valid JSON that does not match the expected response schema.
    #[error("Unexpected response shape: {0}")]
    Schema(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Request(_) | ApiError::MalformedBody(_)
        )
    }

    pub fn is_application(&self) -> bool {
        matches!(self, ApiError::Application(_))
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, ApiError::Schema(_))
    }
}

/// Input rejected locally, before any request is issued.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: &'static str },

    #[error("Please select a PDF file")]
    NotPdf { file_name: String },
}
