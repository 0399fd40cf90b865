//! Error types for query dispatch.

use thiserror::Error;

use crate::address::AddressError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Unsupported request: {0}")]
    UnsupportedRequest(String),

    #[error("Unknown request: no query variant set")]
    UnknownRequest,

    #[error("Validator not found: {0}")]
    ValidatorNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Address encoding failed: {0}")]
    AddressEncoding(#[source] AddressError),

    #[error("Failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Malformed query envelope: {0}")]
    Envelope(#[source] serde_json::Error),
}

/// Coarse classification of a [`QueryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    InvalidAddress,
    UnsupportedRequest,
    UnknownRequest,
    ValidatorNotFound,
    Store,
    Internal,
    Envelope,
}

impl QueryErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryErrorKind::InvalidAddress => "invalid_address",
            QueryErrorKind::UnsupportedRequest => "unsupported_request",
            QueryErrorKind::UnknownRequest => "unknown_request",
            QueryErrorKind::ValidatorNotFound => "validator_not_found",
            QueryErrorKind::Store => "store",
            QueryErrorKind::Internal => "internal",
            QueryErrorKind::Envelope => "envelope",
        }
    }
}

impl std::fmt::Display for QueryErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryError {
    pub fn kind(&self) -> QueryErrorKind {
        match self {
            QueryError::InvalidAddress(_) => QueryErrorKind::InvalidAddress,
            QueryError::UnsupportedRequest(_) => QueryErrorKind::UnsupportedRequest,
            QueryError::UnknownRequest => QueryErrorKind::UnknownRequest,
            QueryError::ValidatorNotFound(_) => QueryErrorKind::ValidatorNotFound,
            QueryError::Store(_) => QueryErrorKind::Store,
            QueryError::AddressEncoding(_) | QueryError::Serialize(_) => QueryErrorKind::Internal,
            QueryError::Envelope(_) => QueryErrorKind::Envelope,
        }
    }

    pub(crate) fn unsupported(detail: impl Into<String>) -> Self {
        QueryError::UnsupportedRequest(detail.into())
    }
}
