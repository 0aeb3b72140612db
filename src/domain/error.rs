//! Error types for ragdesk.
//!
//! This module defines the crate-level error [`RagdeskError`], the
//! [`TransportError`] produced by every exchange with the indexing backend,
//! and the [`Result`] alias used throughout the crate. All errors are
//! implemented with `thiserror`.

use super::phase::Phase;
use thiserror::Error;

/// The main error type for ragdesk operations.
///
/// Transport failures are normally absorbed by the coordinator and turned into
/// a `Failed` phase status; they only surface through this type when a caller
/// talks to the service directly.
///
/// # Examples
///
/// ```
/// use ragdesk::domain::RagdeskError;
///
/// fn validate_config() -> Result<(), RagdeskError> {
///     Err(RagdeskError::Config("base_url must not be empty".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum RagdeskError {
    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A request to the indexing backend failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// A dashboard command could not be parsed.
    #[error("Invalid input: {0}")]
    Input(String),
}

/// Why a request to the backend did not produce a usable result.
///
/// Carries rendered messages instead of the underlying library errors so that
/// failures can travel inside cloneable, comparable events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportCause {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("network failure: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP {code}{}", body_suffix(.body))]
    Status {
        /// HTTP status code.
        code: u16,
        /// Leading part of the response body, for diagnostics.
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The request body could not be built.
    #[error("could not encode request: {0}")]
    Encoding(String),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

/// Uniform failure outcome of a single backend exchange.
///
/// `phase` names the coordinator phase that issued the request; `cause`
/// distinguishes network, status, parsing and encoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{phase} request failed: {cause}")]
pub struct TransportError {
    pub phase: Phase,
    #[source]
    pub cause: TransportCause,
}

impl TransportError {
    #[must_use]
    pub const fn new(phase: Phase, cause: TransportCause) -> Self {
        Self { phase, cause }
    }

    #[must_use]
    pub fn network(phase: Phase, message: impl Into<String>) -> Self {
        Self::new(phase, TransportCause::Network(message.into()))
    }

    #[must_use]
    pub fn status(phase: Phase, code: u16, body: impl Into<String>) -> Self {
        Self::new(phase, TransportCause::Status { code, body: body.into() })
    }

    #[must_use]
    pub fn malformed(phase: Phase, message: impl Into<String>) -> Self {
        Self::new(phase, TransportCause::Malformed(message.into()))
    }

    #[must_use]
    pub fn encoding(phase: Phase, message: impl Into<String>) -> Self {
        Self::new(phase, TransportCause::Encoding(message.into()))
    }
}

/// A specialized `Result` type for ragdesk operations.
pub type Result<T> = std::result::Result<T, RagdeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_names_the_phase() {
        let err = TransportError::status(Phase::Upload, 413, "too large");
        assert_eq!(err.to_string(), "upload request failed: backend returned HTTP 413: too large");

        let err = TransportError::status(Phase::ListDocuments, 500, "");
        assert_eq!(err.to_string(), "list request failed: backend returned HTTP 500");
    }

    #[test]
    fn transport_error_converts_into_crate_error() {
        let err: RagdeskError = TransportError::malformed(Phase::Search, "expected array").into();
        assert!(matches!(err, RagdeskError::Transport(ref t) if t.phase == Phase::Search));
    }
}
