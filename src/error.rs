// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names a distinct failure mode: missing configuration,
//! transport failures, store-reported errors, absent resources, and
//! malformed content. The core performs no retries — transient store
//! failures propagate unchanged to the caller.

use std::fmt;
use thiserror::Error;

/// Content store error codes as a typed vocabulary.
///
/// Instead of matching against magic strings from the store's error
/// payloads, the failure vocabulary is encoded in the type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// The requested document does not exist or is inaccessible
    DocumentNotFound,
    /// The supplied ref does not name a known snapshot (expired preview)
    InvalidRef,
    /// Access token is missing, invalid, or expired
    Unauthorized,
    /// Request rate limit exceeded
    RateLimited,
    /// Store internal server error
    InternalError,
    /// Store is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl StoreErrorCode {
    /// Parse a store error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "document_not_found" => Self::DocumentNotFound,
            "invalid_ref" => Self::InvalidRef,
            "unauthorized" => Self::Unauthorized,
            "rate_limited" => Self::RateLimited,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            404 => Self::DocumentNotFound,
            401 | 403 => Self::Unauthorized,
            429 => Self::RateLimited,
            503 => Self::ServiceUnavailable,
            500..=599 => Self::InternalError,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error is transient and worth retrying by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServiceUnavailable | Self::InternalError
        )
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DocumentNotFound)
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentNotFound => write!(f, "document_not_found"),
            Self::InvalidRef => write!(f, "invalid_ref"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Content store returned an error ({code}): {message}")]
    StoreService {
        code: StoreErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("No {doc_type} document with uid '{uid}'")]
    NotFound { doc_type: String, uid: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Malformed rich text content: {0}")]
    MalformedContent(String),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether this error is an absent-resource condition rather than a
    /// fault (the rendering layer decides the fallback UI).
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::StoreService { code, .. } => code.is_not_found(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
