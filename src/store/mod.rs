// src/store/mod.rs
//! Content store interaction — the ability to retrieve post records.
//!
//! Business logic depends on the [`ContentStore`] capability trait, never
//! on HTTP details. Pagination cursors are opaque: they are received from
//! one call and handed back to `fetch_page` unchanged.

mod client;
mod query;
mod responses;

pub use client::{post_type_predicate, HttpContentStore};
pub use query::{GetOptions, Ordering, Predicate, QueryOptions, SortDirection};
pub use responses::{QueryResponse, RawBanner, RawContentBlock, RawDocument, RawPostData};

use crate::error::AppError;
use crate::types::Cursor;

/// The ability to retrieve content from the store.
///
/// Object-safe; consumers hold it as `&dyn ContentStore` or
/// `Arc<dyn ContentStore>`. Implementations own transport policy
/// (timeouts, retries); this interface defines none.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    /// Runs a filtered, ordered, paginated query.
    async fn query(
        &self,
        predicate: Predicate,
        options: QueryOptions,
    ) -> Result<QueryResponse, AppError>;

    /// Looks up a single document by type and uid.
    ///
    /// Fails with [`AppError::NotFound`] when no such document exists.
    async fn get_by_uid(
        &self,
        doc_type: &str,
        uid: &str,
        options: GetOptions,
    ) -> Result<RawDocument, AppError>;

    /// Fetches the page a previously returned cursor points at.
    async fn fetch_page(
        &self,
        cursor: &Cursor,
        options: GetOptions,
    ) -> Result<QueryResponse, AppError>;
}
