// src/page.rs
//! Page composition: assembles the view models the rendering layer needs.
//!
//! This is the only place that issues more than one store call per
//! request, so it is also where the preview ref must be threaded into
//! every call — a request that mixes refs would mix published and
//! unpublished content.

use crate::constants::{LISTING_FETCH_FIELDS, LISTING_PAGE_SIZE, POST_DOCUMENT_TYPE};
use crate::error::AppError;
use crate::listing::ListingState;
use crate::model::{ListingPage, NeighborPair, PostDetail};
use crate::neighbors::resolve_neighbors;
use crate::readtime::estimate_minutes;
use crate::richtext;
use crate::store::{post_type_predicate, ContentStore, GetOptions, QueryOptions};
use crate::types::{PostUid, PreviewRef};

/// A post body section rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub heading: String,
    pub html: String,
}

/// Everything a post page renders: the detail record, its estimated
/// reading time, the body rendered to markup, and chronological
/// navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
    pub detail: PostDetail,
    pub reading_minutes: u32,
    pub sections: Vec<RenderedSection>,
    pub neighbors: NeighborPair,
}

/// Loads the first listing page and seeds a session's accumulator state.
pub async fn load_listing(
    store: &dyn ContentStore,
    ref_token: Option<&PreviewRef>,
) -> Result<ListingState, AppError> {
    let options = QueryOptions::default()
        .with_fetch(LISTING_FETCH_FIELDS)
        .with_page_size(LISTING_PAGE_SIZE)
        .with_ref(ref_token.cloned());

    let response = store.query(post_type_predicate(), options).await?;
    let page = ListingPage::from_response(&response)?;
    log::info!(
        "listing seeded with {} posts (more: {})",
        page.items.len(),
        page.next_cursor.is_some()
    );
    Ok(ListingState::initialize(page))
}

/// Grows an existing listing state by one page from the store.
pub async fn load_more_listing(
    store: &dyn ContentStore,
    state: &ListingState,
    ref_token: Option<&PreviewRef>,
) -> Result<ListingState, AppError> {
    state
        .load_more(|cursor| async move {
            let options = GetOptions::default().with_ref(ref_token.cloned());
            let response = store.fetch_page(&cursor, options).await?;
            ListingPage::from_response(&response)
        })
        .await
}

/// Loads one post page: detail, reading time, rendered body, neighbors.
///
/// Estimation and HTML rendering fail together on malformed content; a
/// page is never produced with a body it could not render.
pub async fn load_post_page(
    store: &dyn ContentStore,
    uid: &PostUid,
    ref_token: Option<&PreviewRef>,
) -> Result<PostPage, AppError> {
    let options = GetOptions::default().with_ref(ref_token.cloned());
    let record = store
        .get_by_uid(POST_DOCUMENT_TYPE, uid.as_str(), options)
        .await?;
    let detail = PostDetail::from_record(&record)?;

    let sections = detail
        .content
        .iter()
        .map(|block| {
            Ok(RenderedSection {
                heading: block.heading.clone(),
                html: richtext::as_html(&block.body)?,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;
    let reading_minutes = estimate_minutes(&detail.content);

    let neighbors = resolve_neighbors(store, &detail.summary.record_id, ref_token).await?;

    Ok(PostPage {
        detail,
        reading_minutes,
        sections,
        neighbors,
    })
}
