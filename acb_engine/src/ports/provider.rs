//! Catalog provider port
//!
//! Hosts serve field and operator catalogs per locale. The port is
//! synchronous; an async host adapts by resolving its future before calling
//! in. Provider failures surface as state the caller renders, never as a
//! panic.

use thiserror::Error;

use crate::catalog::operators::OperatorCatalog;
use crate::model::FieldRef;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("catalog fetch failed for locale '{locale}': {reason}")]
    FetchFailed { locale: String, reason: String },
    #[error("scoped field fetch failed for parent '{parent_id}': {reason}")]
    ScopedFetchFailed { parent_id: String, reason: String },
    #[error("malformed catalog payload: {reason}")]
    MalformedPayload { reason: String },
}

impl ProviderError {
    pub fn fetch_failed(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            locale: locale.into(),
            reason: reason.into(),
        }
    }

    pub fn scoped_fetch_failed(parent_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ScopedFetchFailed {
            parent_id: parent_id.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed_payload(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }

    /// Stable code for log events.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FetchFailed { .. } => "PROVIDER_FETCH_FAILED",
            Self::ScopedFetchFailed { .. } => "PROVIDER_SCOPED_FETCH_FAILED",
            Self::MalformedPayload { .. } => "PROVIDER_MALFORMED_PAYLOAD",
        }
    }
}

/// Host-implemented catalog source.
pub trait CatalogProvider: Send + Sync {
    /// Root-level fields for a locale.
    fn fields_by_locale(&self, locale: &str) -> Result<Vec<FieldRef>, ProviderError>;

    /// Fields scoped to one parent (archival type) for a locale.
    fn scoped_fields(&self, parent_id: &str, locale: &str)
        -> Result<Vec<FieldRef>, ProviderError>;

    /// Operator tables for a locale.
    fn operator_catalog(&self, locale: &str) -> Result<OperatorCatalog, ProviderError>;

    /// Raw saved-search payloads, shape-normalized downstream.
    fn saved_searches(&self, locale: &str) -> Result<serde_json::Value, ProviderError>;
}

/// Renderable outcome of the latest catalog fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    pub has_error: bool,
    pub message: String,
}

impl FetchState {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failed(error: &ProviderError) -> Self {
        Self {
            has_error: true,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_state_from_error() {
        let err = ProviderError::fetch_failed("de", "timeout");
        let state = FetchState::failed(&err);
        assert!(state.has_error);
        assert!(state.message.contains("de"));
        assert_eq!(err.error_code(), "PROVIDER_FETCH_FAILED");
    }

    #[test]
    fn test_fetch_state_ok() {
        assert!(!FetchState::ok().has_error);
    }
}
