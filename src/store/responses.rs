// src/store/responses.rs
//! Wire-shape types for content store responses.
//!
//! These mirror the store's JSON exactly and carry no behavior; mapping
//! into domain values lives in `model`.

use crate::richtext::RichTextNode;
use crate::types::Cursor;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page of results from a paginated query.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<RawDocument>,
    /// Opaque token for the following page; absent when exhausted.
    pub next_page: Option<Cursor>,
}

/// A raw post record as the store returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    pub id: String,
    pub uid: Option<String>,
    pub first_publication_date: Option<DateTime<Utc>>,
    pub last_publication_date: Option<DateTime<Utc>>,
    pub data: RawPostData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPostData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub author: String,
    pub banner: Option<RawBanner>,
    /// Absent when the query's fetch list excluded bodies (listing queries).
    #[serde(default)]
    pub content: Vec<RawContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBanner {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawContentBlock {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: Vec<RichTextNode>,
}

/// Error payload the store attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreErrorResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_response_parses_with_and_without_cursor() {
        let json = r#"{
            "results": [{
                "id": "rec-1",
                "uid": "first-post",
                "first_publication_date": "2021-03-15T10:00:00Z",
                "last_publication_date": null,
                "data": {"title": "First", "subtitle": "sub", "author": "Ana"}
            }],
            "next_page": "https://store.example/page2"
        }"#;
        let page: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 1);
        assert!(page.next_page.is_some());
        assert!(page.results[0].data.content.is_empty());

        let terminal = r#"{"results": [], "next_page": null}"#;
        let page: QueryResponse = serde_json::from_str(terminal).unwrap();
        assert!(page.next_page.is_none());
    }
}
