//! HTTP fetcher implementation
//!
//! This module handles all outbound HTTP requests, including:
//! - Building HTTP clients with the configured user agent and timeouts
//! - Bounding the number of requests in flight
//! - Classifying failures into timeouts, rate limiting and upstream errors

use crate::config::HttpConfig;
use crate::SitemapError;
use async_trait::async_trait;
use reqwest::{header, redirect::Policy, Client, StatusCode};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// A successfully fetched resource
#[derive(Debug, Clone)]
pub struct FetchedResource {
    /// Content-Type header value, if any
    pub content_type: Option<String>,
    /// Raw response body
    pub body: Vec<u8>,
}

/// Source of raw documents
///
/// Implementations return `Ok` only for 2xx responses.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> crate::Result<FetchedResource>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The outbound HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Fetcher`] backed by a shared `reqwest` client
///
/// At most `max_concurrent_requests` requests are in flight at once across
/// every caller holding a clone of this fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    permits: Arc<Semaphore>,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> crate::Result<Self> {
        let client = build_http_client(config)
            .map_err(|e| SitemapError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            permits: Arc::new(Semaphore::new(config.max_concurrent_requests.max(1) as usize)),
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> crate::Result<FetchedResource> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| SitemapError::Internal("HTTP fetcher has been shut down".to_string()))?;

        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SitemapError::RateLimited {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(SitemapError::Upstream {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_error(url, e))?;

        Ok(FetchedResource {
            content_type,
            body: body.to_vec(),
        })
    }
}

/// Maps a transport failure to the matching error kind
///
/// Deadline expiry becomes [`SitemapError::Timeout`]; every other failure to
/// complete the exchange (refused connection, DNS, TLS, truncated body)
/// becomes [`SitemapError::Network`]. Both report as `TIMEOUT`.
fn classify_error(url: &str, error: reqwest::Error) -> SitemapError {
    if error.is_timeout() {
        SitemapError::Timeout {
            url: url.to_string(),
        }
    } else {
        SitemapError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}
