use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Strong typing for store-assigned identities with phantom markers.
///
/// A post's routing slug and its internal record identity are both strings
/// on the wire but must never be confused: the slug addresses `get_by_uid`,
/// the record identity anchors neighbor queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker for the routing slug assigned to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UidMarker;

/// Marker for the store's internal record identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordMarker;

/// A post's routing slug, stable and unique within the store.
pub type PostUid = Id<UidMarker>;

/// A store record's internal identity, used as the neighbor-query anchor.
pub type RecordId = Id<RecordMarker>;

impl<T> Id<T> {
    /// Validates and wraps a raw identifier string.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty("identifier"));
        }
        Ok(Self {
            value: trimmed.to_string(),
            _phantom: PhantomData,
        })
    }

    /// Wraps a value the store itself produced (already well-formed).
    pub(crate) fn from_store(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_store(value))
    }
}
