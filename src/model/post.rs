// src/model/post.rs
//! Domain view models mapped from raw store records.
//!
//! All of these are immutable values. `record_id` is the stable unique key
//! callers should use for list items; the store already assigns it.

use crate::error::AppError;
use crate::richtext::RichTextNode;
use crate::store::{QueryResponse, RawContentBlock, RawDocument};
use crate::types::{Cursor, PostUid, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post as it appears in listings and neighbor links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub uid: PostUid,
    pub record_id: RecordId,
    pub published_at: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

impl PostSummary {
    /// Maps one raw store record to a summary.
    pub fn from_record(record: &RawDocument) -> Result<Self, AppError> {
        let uid = record
            .uid
            .as_deref()
            .ok_or_else(|| {
                AppError::MalformedResponse(format!("record '{}' has no uid", record.id))
            })
            .and_then(|uid| PostUid::parse(uid).map_err(AppError::from))?;
        Ok(Self {
            uid,
            record_id: RecordId::parse(&record.id)?,
            published_at: record.first_publication_date,
            title: record.data.title.clone(),
            subtitle: record.data.subtitle.clone(),
            author: record.data.author.clone(),
        })
    }
}

/// One heading-plus-body section of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub heading: String,
    pub body: Vec<RichTextNode>,
}

impl From<&RawContentBlock> for ContentBlock {
    fn from(raw: &RawContentBlock) -> Self {
        Self {
            heading: raw.heading.clone(),
            body: raw.body.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub url: String,
}

/// A full post page: summary fields plus banner and body sections.
///
/// `content` preserves store ordering and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    pub summary: PostSummary,
    pub last_edited_at: Option<DateTime<Utc>>,
    pub banner: Banner,
    pub content: Vec<ContentBlock>,
}

impl PostDetail {
    /// Maps one raw store record to a full detail view.
    pub fn from_record(record: &RawDocument) -> Result<Self, AppError> {
        let summary = PostSummary::from_record(record)?;
        let banner = record
            .data
            .banner
            .as_ref()
            .map(|b| Banner { url: b.url.clone() })
            .ok_or_else(|| {
                AppError::MalformedResponse(format!("post '{}' has no banner", summary.uid))
            })?;
        Ok(Self {
            summary,
            last_edited_at: record.last_publication_date,
            banner,
            content: record.data.content.iter().map(ContentBlock::from).collect(),
        })
    }
}

/// One page of listing results with its continuation cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub items: Vec<PostSummary>,
    pub next_cursor: Option<Cursor>,
}

impl ListingPage {
    /// Maps every record of a query response; fails on the first
    /// malformed record rather than dropping items.
    pub fn from_response(response: &QueryResponse) -> Result<Self, AppError> {
        let items = response
            .results
            .iter()
            .map(PostSummary::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            items,
            next_cursor: response.next_page.clone(),
        })
    }
}

/// The chronological neighbors of an anchor post.
///
/// Either side is absent when the anchor is the oldest or newest post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborPair {
    pub previous: Option<PostSummary>,
    pub next: Option<PostSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RawPostData;
    use pretty_assertions::assert_eq;

    fn raw_record(id: &str, uid: &str, title: &str) -> RawDocument {
        RawDocument {
            id: id.to_string(),
            uid: Some(uid.to_string()),
            first_publication_date: "2021-03-15T10:00:00Z".parse().ok(),
            last_publication_date: None,
            data: RawPostData {
                title: title.to_string(),
                subtitle: "a subtitle".to_string(),
                author: "Ana".to_string(),
                banner: None,
                content: Vec::new(),
            },
        }
    }

    #[test]
    fn summary_maps_record_fields() {
        let summary = PostSummary::from_record(&raw_record("rec-1", "first", "First")).unwrap();
        assert_eq!(summary.uid.as_str(), "first");
        assert_eq!(summary.record_id.as_str(), "rec-1");
        assert_eq!(summary.title, "First");
        assert!(summary.published_at.is_some());
    }

    #[test]
    fn summary_requires_a_uid() {
        let mut record = raw_record("rec-1", "first", "First");
        record.uid = None;
        assert!(matches!(
            PostSummary::from_record(&record),
            Err(AppError::MalformedResponse(_))
        ));
    }

    #[test]
    fn detail_requires_a_banner() {
        let record = raw_record("rec-1", "first", "First");
        assert!(matches!(
            PostDetail::from_record(&record),
            Err(AppError::MalformedResponse(_))
        ));
    }

    #[test]
    fn listing_page_fails_on_first_malformed_record() {
        let mut bad = raw_record("rec-2", "second", "Second");
        bad.uid = None;
        let response = QueryResponse {
            results: vec![raw_record("rec-1", "first", "First"), bad],
            next_page: Some(Cursor::new("c1")),
        };
        assert!(ListingPage::from_response(&response).is_err());
    }

    #[test]
    fn listing_page_keeps_store_order_and_cursor() {
        let response = QueryResponse {
            results: vec![
                raw_record("rec-1", "first", "First"),
                raw_record("rec-2", "second", "Second"),
            ],
            next_page: Some(Cursor::new("c1")),
        };
        let page = ListingPage::from_response(&response).unwrap();
        assert_eq!(page.items[0].uid.as_str(), "first");
        assert_eq!(page.items[1].uid.as_str(), "second");
        assert_eq!(page.next_cursor, Some(Cursor::new("c1")));
    }
}
