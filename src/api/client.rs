//! HTTP client for the two read-only directory endpoints

use serde::de::DeserializeOwned;
use std::sync::OnceLock;

use crate::types::{FilterOptions, SearchResponse, Therapist};

/// Page size requested at startup. Large enough to pull the whole corpus in
/// one round trip, so the page never paginates.
pub const SEARCH_PAGE_SIZE: u32 = 2000;

static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the API base URL. Call this at startup, before any request.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API base URL. Empty means same-origin relative paths.
pub fn api_url() -> &'static str {
    API_URL.get().map(|s| s.as_str()).unwrap_or("")
}

/// Error type for directory API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure from the underlying HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the directory API
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client against the given base URL. An empty base yields
    /// relative request paths, which the browser resolves against the page
    /// origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the filter vocabulary for the select controls.
    pub async fn filter_options(&self) -> Result<FilterOptions, ApiError> {
        self.execute(self.http.get(self.endpoint("/api/filter-options")))
            .await
    }

    /// Fetch the therapist listing. Called once at startup with
    /// [`SEARCH_PAGE_SIZE`] to request the entire corpus.
    pub async fn search_therapists(&self, per_page: u32) -> Result<Vec<Therapist>, ApiError> {
        let request = self
            .http
            .get(self.endpoint("/api/search/therapists"))
            .query(&[("per_page", per_page)]);
        let response: SearchResponse = self.execute(request).await?;
        Ok(response.therapists)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Create a client against the configured base URL.
pub fn default_client() -> ApiClient {
    ApiClient::new(api_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(
            client.endpoint("/api/filter-options"),
            "http://localhost:8000/api/filter-options"
        );
    }

    #[test]
    fn endpoint_trims_a_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(
            client.endpoint("/api/search/therapists"),
            "http://localhost:8000/api/search/therapists"
        );
    }

    #[test]
    fn empty_base_yields_relative_paths() {
        let client = ApiClient::new("");
        assert_eq!(client.endpoint("/api/filter-options"), "/api/filter-options");
    }
}
