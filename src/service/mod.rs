//! Request/response operations
//!
//! This module exposes the three operations a protocol adapter serves:
//! - `discover_sitemaps`
//! - `list_sitemap_urls`
//! - `build_crawl_frontier`
//!
//! Each takes a deserializable input and answers with an [`Envelope`]. Errors
//! never escape as `Err`; they are folded into failure envelopes.

mod envelope;

pub use envelope::{Envelope, ErrorBody, Failure, FailureMeta, Pagination, Success, SuccessMeta};

use crate::config::Config;
use crate::discovery::{discover, Discovery};
use crate::enumerate::{enumerate, SitemapPage, DEFAULT_PAGE_SIZE};
use crate::frontier::{build_frontier, Frontier, FrontierRules};
use crate::sitemap::{Fetcher, HttpFetcher};
use serde::Deserialize;
use std::sync::Arc;

/// Input of `discover_sitemaps`
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverInput {
    pub url: String,
}

/// Input of `list_sitemap_urls`
#[derive(Debug, Clone, Deserialize)]
pub struct ListInput {
    pub sitemap_url: String,

    #[serde(default)]
    pub limit: Option<usize>,

    #[serde(default)]
    pub cursor: Option<String>,
}

/// Input of `build_crawl_frontier`
#[derive(Debug, Clone, Deserialize)]
pub struct FrontierInput {
    pub seed_url: String,

    #[serde(default)]
    pub rules: Option<FrontierRules>,

    #[serde(default)]
    pub limit: Option<u64>,
}

/// Entry point for hosting the operations
///
/// Holds no per-call state; one instance can serve concurrent calls.
#[derive(Clone)]
pub struct SitemapService {
    fetcher: Arc<dyn Fetcher>,
}

impl SitemapService {
    /// Creates a service that fetches over HTTP using `config`
    pub fn new(config: &Config) -> crate::Result<Self> {
        Ok(Self::with_fetcher(Arc::new(HttpFetcher::new(&config.http)?)))
    }

    /// Creates a service over any [`Fetcher`]
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Finds all sitemap documents for a domain
    pub async fn discover_sitemaps(&self, input: DiscoverInput) -> Envelope<Discovery> {
        match discover(self.fetcher.as_ref(), &input.url).await {
            Ok(discovery) => {
                let source = Some(discovery.domain.clone());
                let warnings = discovery.warnings.clone();
                Envelope::success(discovery, source, warnings)
            }
            Err(e) => {
                tracing::warn!("discover_sitemaps failed: {}", e);
                Envelope::failure(&e)
            }
        }
    }

    /// Lists one page of entries from a single sitemap document
    pub async fn list_sitemap_urls(&self, input: ListInput) -> Envelope<SitemapPage> {
        let cursor = input.cursor.as_deref().filter(|c| !c.is_empty());
        match enumerate(self.fetcher.as_ref(), &input.sitemap_url, input.limit, cursor).await {
            Ok(page) => {
                let pagination = Pagination {
                    next_cursor: page.next_cursor.clone(),
                    offset: page.offset,
                    limit: input.limit.unwrap_or(DEFAULT_PAGE_SIZE),
                };
                let source = Some(page.sitemap_url.clone());
                Envelope::success(page, source, Vec::new()).with_pagination(pagination)
            }
            Err(e) => {
                tracing::warn!("list_sitemap_urls failed: {}", e);
                Envelope::failure(&e)
            }
        }
    }

    /// Builds a filtered, deduplicated crawl frontier for a seed URL
    pub async fn build_crawl_frontier(&self, input: FrontierInput) -> Envelope<Frontier> {
        match build_frontier(
            self.fetcher.as_ref(),
            &input.seed_url,
            input.rules.as_ref(),
            input.limit,
        )
        .await
        {
            Ok(frontier) => {
                let source = Some(frontier.seed_url.clone());
                let warnings = frontier.warnings.clone();
                Envelope::success(frontier, source, warnings)
            }
            Err(e) => {
                tracing::warn!("build_crawl_frontier failed: {}", e);
                Envelope::failure(&e)
            }
        }
    }
}
