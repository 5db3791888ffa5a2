// src/lib.rs
//! waypost — content resolution for a blog backed by a headless content store.
//!
//! The crate turns raw paginated query results into stable view models:
//!
//! - **Listing accumulation** — [`ListingState`] grows the post index one
//!   opaque-cursor page at a time.
//! - **Reading time** — [`estimate_minutes`] maps structured rich-text
//!   bodies to whole minutes.
//! - **Neighbor resolution** — [`resolve_neighbors`] finds the
//!   chronologically adjacent posts around an anchor.
//! - **Preview refs** — a [`PreviewRef`] pins every store call of a
//!   request to one content snapshot.
//!
//! The store itself is consumed through the [`ContentStore`] capability;
//! [`HttpContentStore`] is the production implementation.

mod config;
mod constants;
mod error;
mod listing;
mod model;
mod neighbors;
mod page;
mod readtime;
mod richtext;
mod store;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, Result, StoreErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{Command, CommandLineInput, ResolvedConfig};

// --- Domain Model ---
pub use crate::model::{
    Banner, ContentBlock, ListingPage, NeighborPair, PostDetail, PostSummary,
};

// --- Domain Types ---
pub use crate::types::{Cursor, Id, PostUid, PreviewRef, RecordId, RecordMarker, UidMarker};

// --- Store Capability ---
pub use crate::store::{
    post_type_predicate, ContentStore, GetOptions, HttpContentStore, Ordering, Predicate,
    QueryOptions, QueryResponse, RawBanner, RawContentBlock, RawDocument, RawPostData,
    SortDirection,
};

// --- Rich Text ---
pub use crate::richtext::{as_html, as_text, NodeKind, RichTextNode, Span, SpanKind};

// --- Core Operations ---
pub use crate::listing::ListingState;
pub use crate::neighbors::resolve_neighbors;
pub use crate::page::{
    load_listing, load_more_listing, load_post_page, PostPage, RenderedSection,
};
pub use crate::readtime::estimate_minutes;

// --- Constants ---
pub use crate::constants::{LISTING_PAGE_SIZE, POST_DOCUMENT_TYPE, WORDS_PER_MINUTE};
