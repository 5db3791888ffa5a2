// src/store/query.rs
//! Query shapes accepted by the content store.
//!
//! Options follow the immutable `with_*` builder style: each call returns
//! a new value, so a base option set can be shared and specialized.

use crate::types::{PreviewRef, RecordId};
use std::fmt;

/// A filter predicate over store documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Exact-match on a document path, e.g. `at("document.type", "post")`.
    At { path: String, value: String },
}

impl Predicate {
    pub fn at(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::At {
            path: path.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At { path, value } => write!(f, "[at({},\"{}\")]", path, value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A single ordering clause for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub field: String,
    pub direction: SortDirection,
}

impl Ordering {
    /// Orders by the store's first-publication-date field.
    pub fn publication_date(direction: SortDirection) -> Self {
        Self {
            field: crate::constants::PUBLICATION_DATE_FIELD.to_string(),
            direction,
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}", self.field),
            SortDirection::Descending => write!(f, "{} desc", self.field),
        }
    }
}

/// Options for a paginated document query.
///
/// `ref_token` must carry the request's preview ref on every query the
/// request issues, or published and preview content will mix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Field paths to fetch; empty means the store's full default set.
    pub fetch: Vec<String>,
    /// Page size; `None` defers to the store default.
    pub page_size: Option<u32>,
    pub ref_token: Option<PreviewRef>,
    pub orderings: Vec<Ordering>,
    /// Exclude everything up to and including this record in the query's
    /// traversal order. Anchors neighbor queries.
    pub after: Option<RecordId>,
}

impl QueryOptions {
    pub fn with_fetch(self, fields: &[&str]) -> Self {
        Self {
            fetch: fields.iter().map(|f| f.to_string()).collect(),
            ..self
        }
    }

    pub fn with_page_size(self, page_size: u32) -> Self {
        Self {
            page_size: Some(page_size),
            ..self
        }
    }

    pub fn with_ref(self, ref_token: Option<PreviewRef>) -> Self {
        Self { ref_token, ..self }
    }

    pub fn with_ordering(self, ordering: Ordering) -> Self {
        let mut orderings = self.orderings;
        orderings.push(ordering);
        Self { orderings, ..self }
    }

    pub fn with_after(self, record: RecordId) -> Self {
        Self {
            after: Some(record),
            ..self
        }
    }
}

/// Options for a single-document lookup or an opaque page fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetOptions {
    pub ref_token: Option<PreviewRef>,
}

impl GetOptions {
    pub fn with_ref(self, ref_token: Option<PreviewRef>) -> Self {
        Self { ref_token }
    }
}
