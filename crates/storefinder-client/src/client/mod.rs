//! HTTP client for the paged locations endpoint.

mod endpoint;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use storefinder_core::{AppConfig, FetchError, LocationDataSource, PageResult};

use crate::error::ClientError;
use crate::retry::retry_with_backoff;
use crate::types::LocationsPageResponse;

pub use endpoint::build_endpoint;

/// Construction parameters for [`LocationsClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme, host and optional path prefix, e.g. `https://api.example.com/v1`.
    pub base_url: String,
    /// Path of the locations resource appended to `base_url`.
    pub locations_path: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    /// Extra attempts after the first failure for transient errors. `0` disables retries.
    pub max_retries: u32,
    /// Base delay for exponential backoff: `backoff_base_secs * 2^attempt`.
    pub backoff_base_secs: u64,
}

impl ClientConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            locations_path: config.locations_path.clone(),
            request_timeout_secs: config.request_timeout_secs,
            connect_timeout_secs: config.connect_timeout_secs,
            user_agent: config.user_agent.clone(),
            max_retries: config.max_retries,
            backoff_base_secs: config.retry_backoff_base_secs,
        }
    }
}

/// HTTP data source for store locations.
///
/// Issues `GET <endpoint>?page=N` and decodes the JSON envelope. Non-2xx
/// responses become [`ClientError::UnexpectedStatus`] (or
/// [`ClientError::RateLimited`] for 429). Transient failures are retried only
/// when `max_retries > 0`.
pub struct LocationsClient {
    client: Client,
    endpoint: reqwest::Url,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl LocationsClient {
    /// Builds the client and validates the endpoint URL.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidBaseUrl`] if `base_url` + `locations_path` is not a valid URL.
    /// - [`ClientError::Http`] if the underlying `reqwest::Client` cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let endpoint = build_endpoint(&config.base_url, &config.locations_path)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            endpoint,
            max_retries: config.max_retries,
            backoff_base_secs: config.backoff_base_secs,
        })
    }

    /// Shorthand for `LocationsClient::new(&ClientConfig::from_app_config(config))`.
    ///
    /// # Errors
    ///
    /// See [`LocationsClient::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(&ClientConfig::from_app_config(config))
    }

    /// Fetches one page of locations.
    ///
    /// # Errors
    ///
    /// - [`ClientError::RateLimited`]: HTTP 429 after all retries.
    /// - [`ClientError::UnexpectedStatus`]: any other non-2xx status (5xx retried).
    /// - [`ClientError::Http`]: network or TLS failure after all retries.
    /// - [`ClientError::Deserialize`]: body is not a valid locations page (not retried).
    pub async fn fetch_locations_page(
        &self,
        page: u32,
    ) -> Result<LocationsPageResponse, ClientError> {
        let url = self.page_url(page);

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                tracing::debug!(page, %url, "fetching locations page");
                let response = self
                    .client
                    .get(url.clone())
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(ClientError::RateLimited { retry_after_secs });
                }

                if !status.is_success() {
                    return Err(ClientError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = response.text().await?;
                let parsed = serde_json::from_str::<LocationsPageResponse>(&body).map_err(|e| {
                    ClientError::Deserialize {
                        context: format!("locations page {page}"),
                        source: e,
                    }
                })?;

                tracing::debug!(
                    page,
                    count = parsed.locations.len(),
                    has_more = parsed.has_more,
                    "locations page received"
                );
                Ok(parsed)
            }
        })
        .await
    }

    fn page_url(&self, page: u32) -> reqwest::Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string());
        url
    }
}

#[async_trait]
impl LocationDataSource for LocationsClient {
    async fn fetch_page(&self, page: u32) -> Result<PageResult, FetchError> {
        self.fetch_locations_page(page)
            .await
            .map(PageResult::from)
            .map_err(FetchError::from)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
