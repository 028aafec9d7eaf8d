//! HTTP client for the external `/search_grants` endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::domain::funder::{ErrorPayload, SearchError, SearchOutcome, SearchResults};
use crate::domain::query::SearchQuery;
use crate::services::search::SearchBackend;

/// Path of the search endpoint relative to the configured base URL.
pub const SEARCH_PATH: &str = "/search_grants";

/// Posts normalized queries to the search endpoint. One request per search,
/// no retries.
#[derive(Clone, Debug)]
pub struct SearchClient {
    http: Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}{SEARCH_PATH}", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn search(&self, query: &SearchQuery) -> SearchOutcome {
        log::info!("POST {} with {} filter(s)", self.endpoint, query.len());

        let response = self
            .http
            .post(&self.endpoint)
            .json(query)
            .send()
            .await
            .map_err(|err| SearchError::Transport(err.to_string()))?;

        let status = response.status();
        log::info!("Search endpoint responded with {status}");

        // The body is JSON for both success and error replies.
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|err| SearchError::Transport(err.to_string()))?;

        if status.is_success() {
            serde_json::from_value::<SearchResults>(body)
                .map_err(|err| SearchError::Transport(err.to_string()))
        } else {
            let payload = serde_json::from_value::<ErrorPayload>(body).unwrap_or_default();
            log::error!("Search endpoint error {status}: {}", payload.message());
            Err(SearchError::Http {
                status: status.as_u16(),
                payload,
            })
        }
    }
}

impl SearchBackend for SearchClient {
    async fn search(&self, query: &SearchQuery) -> SearchOutcome {
        SearchClient::search(self, query).await
    }
}
