//! In-memory [`Fetcher`] for unit tests

use crate::sitemap::fetcher::{FetchedResource, Fetcher};
use crate::SitemapError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum StubResponse {
    Body(String),
    Status(u16),
    Timeout,
}

/// Serves canned responses keyed by exact URL and counts every request
///
/// Unknown URLs answer with HTTP 404.
#[derive(Debug, Default)]
pub(crate) struct StubFetcher {
    responses: HashMap<String, StubResponse>,
    hits: Mutex<HashMap<String, usize>>,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_body(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), StubResponse::Body(body.to_string()));
        self
    }

    pub(crate) fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), StubResponse::Status(status));
        self
    }

    pub(crate) fn with_timeout(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), StubResponse::Timeout);
        self
    }

    /// Number of times `url` was requested
    pub(crate) fn hits(&self, url: &str) -> usize {
        self.hits.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    /// Highest request count for any single URL
    pub(crate) fn max_hits(&self) -> usize {
        self.hits.lock().unwrap().values().copied().max().unwrap_or(0)
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> crate::Result<FetchedResource> {
        *self.hits.lock().unwrap().entry(url.to_string()).or_insert(0) += 1;

        match self.responses.get(url) {
            Some(StubResponse::Body(body)) => Ok(FetchedResource {
                content_type: Some("application/xml".to_string()),
                body: body.clone().into_bytes(),
            }),
            Some(StubResponse::Status(429)) => Err(SitemapError::RateLimited {
                url: url.to_string(),
            }),
            Some(StubResponse::Status(status)) => Err(SitemapError::Upstream {
                url: url.to_string(),
                status: *status,
            }),
            Some(StubResponse::Timeout) => Err(SitemapError::Timeout {
                url: url.to_string(),
            }),
            None => Err(SitemapError::Upstream {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
