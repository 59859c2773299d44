use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::models::ProviderResponse;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered, but not with a 2xx status
    #[error("contributions provider responded with {0}")]
    Status(StatusCode),
    #[error("request to contributions provider failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("contributions provider returned an unexpected body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP client for the yearly contributions provider.
///
/// One request per call, no caching and no retries.
#[derive(Debug, Clone)]
pub struct ContributionsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContributionsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("github-wrapped/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ProviderError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a user's contributions, without the year query.
    pub fn user_url(&self, username: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(username))
    }

    /// Fetch one user's contributions for a calendar year.
    pub async fn fetch_year(
        &self,
        username: &str,
        year: i32,
    ) -> Result<ProviderResponse, ProviderError> {
        let url = self.user_url(username);
        debug!("Fetching contributions from {}?y={}", url, year);

        let response = self
            .client
            .get(&url)
            .query(&[("y", year)])
            .send()
            .await
            .map_err(ProviderError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        response
            .json::<ProviderResponse>()
            .await
            .map_err(ProviderError::Decode)
    }
}
