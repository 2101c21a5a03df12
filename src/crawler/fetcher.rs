//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made by the scraper:
//! - Building HTTP clients with the configured user agent and timeouts
//! - GET requests for the listing, discussion, and gallery pages
//! - Error classification (timeouts, bad statuses, unreadable bodies)
//!
//! There is no retry logic: a failed fetch is reported once and the caller
//! decides whether that failure is fatal.

use crate::config::FetchConfig;
use crate::{FetchError, FetchResult};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// A source of page markup, addressed by URL
///
/// [`HttpFetcher`] is the network implementation. Tests substitute in-memory
/// maps so extraction can be exercised without a server.
pub trait PageSource {
    /// Fetches the page at `url` and returns its body
    fn fetch_page(&self, url: &str) -> impl Future<Output = FetchResult<String>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use gotdrawn::config::FetchConfig;
/// use gotdrawn::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page source backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a freshly built client
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

impl PageSource for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> FetchResult<String> {
        Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!("GET {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return Err(FetchError::Timeout {
                    url: url.to_string(),
                })
            }
            Err(e) => {
                return Err(FetchError::Http {
                    url: url.to_string(),
                    source: e,
                })
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            source: e,
        })
    }
}
