//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Optional exponential backoff retry (disabled by default)
//! - Status code mapping onto ApiError

use crate::error::ApiError;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("eol-timeline/", env!("CARGO_PKG_VERSION"));

/// One request per render; retries are opt-in
const DEFAULT_MAX_RETRIES: u32 = 0;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// HTTP client wrapper with optional retry
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                ApiError::network_error(
                    "",
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Create a client with a custom timeout and the default User-Agent
    pub fn with_timeout(timeout: Duration) -> Result<Self, ApiError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Client that ignores proxy settings, for local test servers
    #[cfg(test)]
    pub(crate) fn direct() -> Self {
        Self {
            client: Client::builder()
                .no_proxy()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap(),
            max_retries: 0,
        }
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Perform a GET request, mapping failures onto ApiError
    pub async fn get_with_context(
        &self,
        url: &str,
        product: &str,
        api: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let mut last_error = None;
        let mut delay = BASE_DELAY_MS;

        for attempt in 0..=self.max_retries {
            tracing::debug!(url, attempt, "requesting lifecycle data");

            match self.client.get(url).send().await {
                Ok(response) => {
                    if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(ApiError::RateLimitExceeded {
                            api: api.to_string(),
                        });

                        if attempt < self.max_retries {
                            tokio::time::sleep(Duration::from_millis(delay)).await;
                            delay *= 2;
                            continue;
                        }
                        break;
                    }

                    if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(ApiError::product_not_found(product, api));
                    }

                    if !response.status().is_success() {
                        return Err(ApiError::network_error(
                            product,
                            api,
                            format!("HTTP {}", response.status()),
                        ));
                    }

                    return Ok(response);
                }
                Err(e) => {
                    last_error = Some(if e.is_timeout() {
                        ApiError::timeout(product, api)
                    } else {
                        ApiError::network_error(product, api, e.to_string())
                    });

                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                        delay *= 2;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::network_error(product, api, "unknown error")))
    }

    /// Perform a GET request and parse the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        product: &str,
        api: &str,
    ) -> Result<T, ApiError> {
        let response = self.get_with_context(url, product, api).await?;

        response.json::<T>().await.map_err(|e| {
            ApiError::invalid_response(product, api, format!("failed to parse JSON: {}", e))
        })
    }
}
