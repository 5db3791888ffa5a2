// src/neighbors.rs
//! Chronological neighbor resolution for a post.
//!
//! The store exposes no "find neighbors" operation, so the resolver
//! issues two independent single-result queries anchored after the same
//! record identity: descending traversal yields the newer post, ascending
//! the older one. Callers see only [`NeighborPair`]; if the store ever
//! grows a range query, this is the one place to swap the strategy.
//!
//! With duplicate publication timestamps the result follows the store's
//! stable tiebreak; no date comparison happens here.

use crate::constants::NEIGHBOR_PAGE_SIZE;
use crate::error::AppError;
use crate::model::{NeighborPair, PostSummary};
use crate::store::{post_type_predicate, ContentStore, Ordering, QueryOptions, SortDirection};
use crate::types::{PreviewRef, RecordId};

/// Resolves the previous (older) and next (newer) posts around an anchor.
///
/// The two directional queries have no ordering dependency and run
/// concurrently. An empty result on either side maps to `None`, never an
/// error.
pub async fn resolve_neighbors(
    store: &dyn ContentStore,
    anchor: &RecordId,
    ref_token: Option<&PreviewRef>,
) -> Result<NeighborPair, AppError> {
    let newer = directional_neighbor(store, anchor, SortDirection::Descending, ref_token);
    let older = directional_neighbor(store, anchor, SortDirection::Ascending, ref_token);
    let (next, previous) = futures::try_join!(newer, older)?;

    log::debug!(
        "neighbors of {}: previous={:?} next={:?}",
        anchor,
        previous.as_ref().map(|p| p.uid.as_str()),
        next.as_ref().map(|p| p.uid.as_str()),
    );
    Ok(NeighborPair { previous, next })
}

/// Runs one page-size-1 directional query anchored after the record.
async fn directional_neighbor(
    store: &dyn ContentStore,
    anchor: &RecordId,
    direction: SortDirection,
    ref_token: Option<&PreviewRef>,
) -> Result<Option<PostSummary>, AppError> {
    let options = QueryOptions::default()
        .with_page_size(NEIGHBOR_PAGE_SIZE)
        .with_ordering(Ordering::publication_date(direction))
        .with_after(anchor.clone())
        .with_ref(ref_token.cloned());

    let page = store.query(post_type_predicate(), options).await?;
    page.results
        .first()
        .map(PostSummary::from_record)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Predicate, QueryResponse, RawDocument, RawPostData};
    use crate::types::Cursor;
    use std::sync::Mutex;

    fn record(id: &str, uid: &str) -> RawDocument {
        RawDocument {
            id: id.to_string(),
            uid: Some(uid.to_string()),
            first_publication_date: "2021-03-15T10:00:00Z".parse().ok(),
            last_publication_date: None,
            data: RawPostData {
                title: uid.to_uppercase(),
                subtitle: String::new(),
                author: "Ana".to_string(),
                banner: None,
                content: Vec::new(),
            },
        }
    }

    /// Store stub answering directional queries from canned records and
    /// capturing every call's options.
    struct DirectionalStore {
        newer: Option<RawDocument>,
        older: Option<RawDocument>,
        calls: Mutex<Vec<QueryOptions>>,
    }

    impl DirectionalStore {
        fn new(newer: Option<RawDocument>, older: Option<RawDocument>) -> Self {
            Self {
                newer,
                older,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl ContentStore for DirectionalStore {
        async fn query(
            &self,
            _predicate: Predicate,
            options: QueryOptions,
        ) -> Result<QueryResponse, AppError> {
            let direction = options
                .orderings
                .first()
                .map(|o| o.direction)
                .expect("neighbor queries always order");
            self.calls.lock().unwrap().push(options);
            let hit = match direction {
                SortDirection::Descending => self.newer.clone(),
                SortDirection::Ascending => self.older.clone(),
            };
            Ok(QueryResponse {
                results: hit.into_iter().collect(),
                next_page: None,
            })
        }

        async fn get_by_uid(
            &self,
            doc_type: &str,
            uid: &str,
            _options: crate::store::GetOptions,
        ) -> Result<RawDocument, AppError> {
            Err(AppError::NotFound {
                doc_type: doc_type.to_string(),
                uid: uid.to_string(),
            })
        }

        async fn fetch_page(
            &self,
            _cursor: &Cursor,
            _options: crate::store::GetOptions,
        ) -> Result<QueryResponse, AppError> {
            unimplemented!("not used by neighbor resolution")
        }
    }

    #[tokio::test]
    async fn middle_anchor_gets_both_neighbors() {
        let store = DirectionalStore::new(
            Some(record("rec-3", "newer-post")),
            Some(record("rec-1", "older-post")),
        );
        let anchor = RecordId::parse("rec-2").unwrap();

        let pair = resolve_neighbors(&store, &anchor, None).await.unwrap();

        assert_eq!(pair.next.unwrap().uid.as_str(), "newer-post");
        assert_eq!(pair.previous.unwrap().uid.as_str(), "older-post");
    }

    #[tokio::test]
    async fn newest_anchor_has_no_next() {
        let store = DirectionalStore::new(None, Some(record("rec-1", "older-post")));
        let anchor = RecordId::parse("rec-2").unwrap();

        let pair = resolve_neighbors(&store, &anchor, None).await.unwrap();

        assert!(pair.next.is_none());
        assert!(pair.previous.is_some());
    }

    #[tokio::test]
    async fn oldest_anchor_has_no_previous() {
        let store = DirectionalStore::new(Some(record("rec-3", "newer-post")), None);
        let anchor = RecordId::parse("rec-2").unwrap();

        let pair = resolve_neighbors(&store, &anchor, None).await.unwrap();

        assert!(pair.previous.is_none());
        assert!(pair.next.is_some());
    }

    #[tokio::test]
    async fn both_queries_anchor_after_the_same_record() {
        let store = DirectionalStore::new(None, None);
        let anchor = RecordId::parse("rec-7").unwrap();

        resolve_neighbors(&store, &anchor, None).await.unwrap();

        let calls = store.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        for options in calls.iter() {
            assert_eq!(options.after, Some(anchor.clone()));
            assert_eq!(options.page_size, Some(1));
        }
        let directions: Vec<_> = calls
            .iter()
            .map(|o| o.orderings.first().unwrap().direction)
            .collect();
        assert!(directions.contains(&SortDirection::Ascending));
        assert!(directions.contains(&SortDirection::Descending));
    }

    #[tokio::test]
    async fn preview_ref_reaches_both_queries() {
        let store = DirectionalStore::new(None, None);
        let anchor = RecordId::parse("rec-7").unwrap();
        let preview = PreviewRef::new("snapshot-x").unwrap();

        resolve_neighbors(&store, &anchor, Some(&preview))
            .await
            .unwrap();

        let calls = store.calls.lock().unwrap();
        assert!(calls
            .iter()
            .all(|o| o.ref_token.as_ref() == Some(&preview)));
    }
}
