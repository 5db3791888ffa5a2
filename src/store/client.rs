// src/store/client.rs
//! HTTP implementation of the [`ContentStore`] capability.
//!
//! A thin wrapper around reqwest: authentication, URL construction, and
//! status mapping. No business logic and no retry policy — transient
//! failures propagate to the caller unchanged.

use super::query::{GetOptions, Predicate, QueryOptions};
use super::responses::{QueryResponse, RawDocument, StoreErrorResponse};
use super::ContentStore;
use crate::constants::POST_DOCUMENT_TYPE;
use crate::error::{AppError, StoreErrorCode};
use crate::types::Cursor;
use reqwest::Client;
use url::Url;

/// Content store client over the repository's document search API.
#[derive(Clone)]
pub struct HttpContentStore {
    client: Client,
    endpoint: Url,
    access_token: Option<String>,
}

impl HttpContentStore {
    /// Creates a client for the given repository endpoint.
    pub fn new(endpoint: &str, access_token: Option<String>) -> Result<Self, AppError> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint,
            access_token,
        })
    }

    /// Builds the search URL for a predicate query.
    fn search_url(&self, predicate: &Predicate, options: &QueryOptions) -> Result<Url, AppError> {
        let mut url = self.endpoint.join("documents/search")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &format!("[{}]", predicate));
            if !options.fetch.is_empty() {
                pairs.append_pair("fetch", &options.fetch.join(","));
            }
            if let Some(page_size) = options.page_size {
                pairs.append_pair("pageSize", &page_size.to_string());
            }
            if !options.orderings.is_empty() {
                let clauses: Vec<String> =
                    options.orderings.iter().map(|o| o.to_string()).collect();
                pairs.append_pair("orderings", &format!("[{}]", clauses.join(",")));
            }
            if let Some(after) = &options.after {
                pairs.append_pair("after", after.as_str());
            }
            if let Some(ref_token) = &options.ref_token {
                pairs.append_pair("ref", ref_token.as_str());
            }
            if let Some(token) = &self.access_token {
                pairs.append_pair("access_token", token);
            }
        }
        Ok(url)
    }

    /// Executes a GET and parses the paginated response body.
    async fn execute(&self, url: Url) -> Result<QueryResponse, AppError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error_body(status, &body));
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(AppError::from)
    }
}

/// Maps a non-success response into the store error vocabulary.
fn map_error_body(status: reqwest::StatusCode, body: &str) -> AppError {
    let (code, message) = match serde_json::from_str::<StoreErrorResponse>(body) {
        Ok(payload) if !payload.code.is_empty() => (
            StoreErrorCode::from_api_response(&payload.code),
            payload.message,
        ),
        Ok(payload) if !payload.message.is_empty() => (
            StoreErrorCode::from_http_status(status.as_u16()),
            payload.message,
        ),
        _ => (
            StoreErrorCode::from_http_status(status.as_u16()),
            status.canonical_reason().unwrap_or("request failed").to_string(),
        ),
    };
    log::warn!("store error {}: {}", code, message);
    AppError::StoreService {
        code,
        message,
        status,
    }
}

#[async_trait::async_trait]
impl ContentStore for HttpContentStore {
    async fn query(
        &self,
        predicate: Predicate,
        options: QueryOptions,
    ) -> Result<QueryResponse, AppError> {
        let url = self.search_url(&predicate, &options)?;
        self.execute(url).await
    }

    async fn get_by_uid(
        &self,
        doc_type: &str,
        uid: &str,
        options: GetOptions,
    ) -> Result<RawDocument, AppError> {
        let query_options = QueryOptions::default()
            .with_page_size(1)
            .with_ref(options.ref_token);
        let predicate = Predicate::at(format!("my.{}.uid", doc_type), uid);
        let url = self.search_url(&predicate, &query_options)?;
        let page = self.execute(url).await?;
        page.results
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound {
                doc_type: doc_type.to_string(),
                uid: uid.to_string(),
            })
    }

    async fn fetch_page(
        &self,
        cursor: &Cursor,
        options: GetOptions,
    ) -> Result<QueryResponse, AppError> {
        // The store hands back a complete next-page URL; the token is
        // opaque to everything above this client.
        let mut url = Url::parse(cursor.as_str())
            .map_err(|e| AppError::MalformedResponse(format!("bad page cursor: {}", e)))?;
        let has_ref = url.query_pairs().any(|(k, _)| k == "ref");
        if let Some(ref_token) = &options.ref_token {
            if !has_ref {
                url.query_pairs_mut().append_pair("ref", ref_token.as_str());
            }
        }
        self.execute(url).await
    }
}

/// Convenience for the common post-type predicate.
pub fn post_type_predicate() -> Predicate {
    Predicate::at("document.type", POST_DOCUMENT_TYPE)
}
