use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of the prose summary step.
///
/// This is *not* part of the analytical output. A run whose summary is
/// `Unavailable` still carries a complete KPI and recommendation set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Summary {
    /// Prose returned by the external generator.
    Generated { generator: String, text: String },

    /// The generator failed; `reason` is the rendered error.
    Unavailable { reason: String },

    /// No generator was configured for this run.
    Skipped,
}

impl Summary {
    pub const PLACEHOLDER: &'static str = "Summary unavailable.";

    pub fn text(&self) -> &str {
        match self {
            Summary::Generated { text, .. } => text,
            Summary::Unavailable { .. } | Summary::Skipped => Self::PLACEHOLDER,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Summary::Generated { .. })
    }
}

/// Failure of the external text-generation service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("authentication rejected: {0}")]
    Unauthorized(String),

    #[error("quota exhausted: {0}")]
    QuotaExceeded(String),

    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    InvalidResponse(String),

    #[error("service returned an empty response")]
    EmptyResponse,
}
