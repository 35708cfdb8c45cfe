//! Normalization errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("saved-group payload does not match any recognized shape: {reason}")]
    UnrecognizedShape { reason: String },
    #[error("saved-group payload is not valid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl NormalizeError {
    pub fn unrecognized_shape(reason: impl Into<String>) -> Self {
        Self::UnrecognizedShape {
            reason: reason.into(),
        }
    }

    /// Stable code for log events.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnrecognizedShape { .. } => "GROUPS_UNRECOGNIZED_SHAPE",
            Self::InvalidJson { .. } => "GROUPS_INVALID_JSON",
        }
    }
}
