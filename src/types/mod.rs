// src/types/mod.rs
//! Domain value types: identities and opaque store tokens.

mod ids;

pub use ids::{Id, PostUid, RecordId, RecordMarker, UidMarker};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Validation failures for values constructed from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Opaque pagination token returned by the content store.
///
/// `None` in the surrounding `Option` signals exhaustion; the token itself
/// is never inspected, only handed back to the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token pinning store queries to a specific content snapshot.
///
/// Supplied in preview mode; absent means the store's default published
/// snapshot. Pass-through only — the value is never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRef(String);

impl PreviewRef {
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ValidationError::Empty("preview ref"));
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
