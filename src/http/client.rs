// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Secondary HTTP client used to fetch pages on behalf of the web view

use std::fmt;
use std::io::Read;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::redirect::Policy;
use reqwest::StatusCode;

use super::MIME_UNKNOWN;
use crate::error::{Error, Result};

/// Something that can fetch a page for the interceptor
///
/// The interceptor only needs status, headers and a readable body, so tests
/// and hosts with their own network stack can plug in here.
pub trait PageSource: Send + Sync {
    /// Issue a GET for `url` without following redirects
    fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// Upstream response whose body has not been read yet
pub struct FetchedPage {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Unread body
    pub body: Box<dyn Read + Send>,
}

impl FetchedPage {
    /// Create a fetched page
    pub fn new(status: StatusCode, headers: HeaderMap, body: Box<dyn Read + Send>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Content type, falling back to `application/octet-stream`
    pub fn content_type(&self) -> &str {
        self.header(CONTENT_TYPE.as_str()).unwrap_or(MIME_UNKNOWN)
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }
}

impl fmt::Debug for FetchedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedPage")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`HttpPageSource`]
#[derive(Debug, Clone, Default)]
pub struct HttpPageSourceConfig {
    /// User agent sent with every fetch. Empty by default.
    pub user_agent: String,
    /// Request timeout; the client default applies when unset
    pub timeout: Option<Duration>,
}

/// Blocking reqwest client with redirects disabled
///
/// Redirects have to reach the interceptor as 3xx responses so it can hand
/// them back to the view untouched. The view then follows them itself.
#[derive(Clone)]
pub struct HttpPageSource {
    client: Client,
    user_agent: HeaderValue,
    config: HttpPageSourceConfig,
}

impl HttpPageSource {
    /// Create a page source with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpPageSourceConfig::default())
    }

    /// Create a page source with custom configuration
    pub fn with_config(config: HttpPageSourceConfig) -> Result<Self> {
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| Error::config(format!("Invalid user agent: {}", e)))?;

        let mut builder = Client::builder().redirect(Policy::none());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent,
            config,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &HttpPageSourceConfig {
        &self.config
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.clone())
            .send()?;

        let status = response.status();
        let headers = response.headers().clone();

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            time_ms = start.elapsed().as_millis() as u64,
            "Fetched page"
        );

        Ok(FetchedPage::new(status, headers, Box::new(response)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_creation() {
        let source = HttpPageSource::new().unwrap();
        assert!(source.config().user_agent.is_empty());
        assert!(source.config().timeout.is_none());
    }

    #[test]
    fn test_invalid_user_agent() {
        let config = HttpPageSourceConfig {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            HttpPageSource::with_config(config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_content_type_default() {
        let page = FetchedPage::new(
            StatusCode::OK,
            HeaderMap::new(),
            Box::new(std::io::empty()),
        );
        assert_eq!(page.content_type(), "application/octet-stream");
    }
}
