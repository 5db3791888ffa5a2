// src/listing.rs
//! The listing accumulator: explicit pagination state for the post index.
//!
//! One page-view session owns one [`ListingState`]. Transitions are pure
//! value-to-value: `load_more` never mutates in place, so a failed fetch
//! leaves the prior state untouched and a UI can roll back by keeping the
//! old value. Callers must serialize `load_more` invocations per session
//! (single-flight); the state itself carries no locking.

use crate::error::AppError;
use crate::model::{ListingPage, PostSummary};
use crate::types::Cursor;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// The visible listing state: every item seen so far, in fetch order,
/// plus the most recently received cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingState {
    items: Vec<PostSummary>,
    next_cursor: Option<Cursor>,
}

impl ListingState {
    /// Seeds state from the first page of a session's initial query.
    pub fn initialize(page: ListingPage) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
        }
    }

    /// All items accumulated so far, in fetch order.
    pub fn items(&self) -> &[PostSummary] {
        &self.items
    }

    /// The current continuation cursor, if any pages remain.
    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    /// Whether further pages exist. UIs hide the load-more trigger when
    /// this is false.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Fetches the next page and returns the grown state.
    ///
    /// New items are strictly appended — never deduplicated, never
    /// reordered — and the fetched page's cursor replaces the current
    /// one. Calling this on an exhausted state is a caller precondition
    /// violation; it is absorbed as a state-preserving no-op rather than
    /// an error.
    pub async fn load_more<F, Fut>(&self, fetch: F) -> Result<Self, AppError>
    where
        F: FnOnce(Cursor) -> Fut,
        Fut: Future<Output = Result<ListingPage, AppError>>,
    {
        let Some(cursor) = self.next_cursor.clone() else {
            log::debug!("load_more on exhausted listing; returning state unchanged");
            return Ok(self.clone());
        };

        let page = fetch(cursor).await?;

        let mut items = self.items.clone();
        items.extend(page.items);
        Ok(Self {
            items,
            next_cursor: page.next_cursor,
        })
    }
}
