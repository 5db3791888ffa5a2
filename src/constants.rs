// src/constants.rs
//! Named constants shared across the crate.

/// Number of post summaries requested per listing page.
pub const LISTING_PAGE_SIZE: u32 = 5;

/// Page size for directional neighbor queries (exactly one result wanted).
pub const NEIGHBOR_PAGE_SIZE: u32 = 1;

/// Assumed reading rate for the reading-time estimate.
pub const WORDS_PER_MINUTE: u32 = 200;

/// Document type of blog posts in the content store.
pub const POST_DOCUMENT_TYPE: &str = "post";

/// Store field the listing and neighbor queries order by.
pub const PUBLICATION_DATE_FIELD: &str = "document.first_publication_date";

/// Fields fetched for listing entries (summaries only, bodies excluded).
pub const LISTING_FETCH_FIELDS: &[&str] = &["post.title", "post.subtitle", "post.author"];

/// Environment variable holding the content store API endpoint.
pub const API_ENDPOINT_ENV: &str = "WAYPOST_API_ENDPOINT";

/// Environment variable holding the optional access token.
pub const ACCESS_TOKEN_ENV: &str = "WAYPOST_ACCESS_TOKEN";
