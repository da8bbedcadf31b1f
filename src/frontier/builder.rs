use crate::discovery::discover;
use crate::frontier::rules::{AppliedRules, FrontierRules, MAX_URLS_CAP};
use crate::sitemap::{fetch_document, Fetcher, SitemapDocument, SkippedDocument};
use crate::url::normalize_input;
use crate::SitemapError;
use serde::Serialize;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One accepted page URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontierUrl {
    pub url: String,

    /// The leaf sitemap the URL was listed in
    pub source_sitemap: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Result of a frontier build
#[derive(Debug, Clone, Serialize)]
pub struct Frontier {
    pub seed_url: String,
    pub frontier: Vec<FrontierUrl>,
    pub total_urls: usize,

    /// Sitemap documents fetched and parsed successfully
    pub sitemaps_processed: usize,

    pub rules_applied: AppliedRules,

    #[serde(skip)]
    pub skipped: Vec<SkippedDocument>,

    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Traversal state shared by every recursive step of one build
struct FrontierContext<'f, 'r> {
    fetcher: &'f dyn Fetcher,
    rules: &'r AppliedRules,
    budget: usize,
    visited: HashSet<String>,
    collected: Vec<FrontierUrl>,
    processed: usize,
    skipped: Vec<SkippedDocument>,
}

impl<'f, 'r> FrontierContext<'f, 'r> {
    fn exhausted(&self) -> bool {
        self.collected.len() >= self.budget
    }

    /// Collects page URLs from one document, recursing into index children
    fn collect<'a>(&'a mut self, url: String) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            if self.exhausted() || !self.visited.insert(url.clone()) {
                return;
            }

            let document = match fetch_document(self.fetcher, &url).await {
                Ok(document) => document,
                Err(e) => {
                    tracing::warn!("Skipping sitemap {}: {}", url, e);
                    self.skipped.push(SkippedDocument {
                        url,
                        reason: e.to_string(),
                    });
                    return;
                }
            };
            self.processed += 1;

            match document {
                SitemapDocument::Index(children) => {
                    for child in children {
                        if self.exhausted() {
                            break;
                        }
                        self.collect(child.location).await;
                    }
                }
                SitemapDocument::Leaf(entries) => {
                    for entry in entries {
                        if self.exhausted() {
                            break;
                        }
                        if self.rules.accepts(&entry.location) {
                            self.collected.push(FrontierUrl {
                                url: entry.location,
                                source_sitemap: url.clone(),
                                last_modified: entry.last_modified,
                                priority: entry.priority,
                            });
                        }
                    }
                }
            }
        })
    }
}

/// Builds the crawl frontier for a seed URL
///
/// # Algorithm
///
/// 1. Discover every sitemap reachable for the seed's domain
/// 2. Walk each discovered document depth-first, sharing one visited set,
///    collecting URLs that pass the rules until `max_urls` are collected
/// 3. Deduplicate by URL, keeping the first occurrence
/// 4. Truncate to the effective limit: `min(limit or max_urls, max_urls, 10000)`
///
/// Documents that fail to fetch or parse are skipped and reported through a
/// warning; they never fail the build.
///
/// # Arguments
///
/// * `fetcher` - Source of documents
/// * `seed_url` - A domain or URL; normalized like [`discover`] input
/// * `rules` - Optional filter rules
/// * `limit` - Optional per-call cap on the frontier length
///
/// # Returns
///
/// * `Ok(Frontier)` - The frontier, possibly empty with warnings
/// * `Err(SitemapError::InvalidInput)` - Bad seed, rules or limit
pub async fn build_frontier(
    fetcher: &dyn Fetcher,
    seed_url: &str,
    rules: Option<&FrontierRules>,
    limit: Option<u64>,
) -> crate::Result<Frontier> {
    let seed = normalize_input(seed_url).ok_or_else(|| {
        SitemapError::InvalidInput(format!(
            "seed_url must be a valid domain or http(s) URL, got {:?}",
            seed_url
        ))
    })?;

    let rules = rules.cloned().unwrap_or_default().normalize()?;

    if limit == Some(0) {
        return Err(SitemapError::InvalidInput(
            "limit must be at least 1".to_string(),
        ));
    }
    let effective_limit = limit
        .unwrap_or(rules.max_urls)
        .min(rules.max_urls)
        .min(MAX_URLS_CAP) as usize;

    let discovery = discover(fetcher, &seed).await?;
    let mut warnings = discovery.warnings;

    if discovery.sitemaps.is_empty() {
        return Ok(Frontier {
            seed_url: seed,
            frontier: Vec::new(),
            total_urls: 0,
            sitemaps_processed: 0,
            rules_applied: rules,
            skipped: Vec::new(),
            warnings,
        });
    }

    let mut ctx = FrontierContext {
        fetcher,
        rules: &rules,
        budget: rules.max_urls as usize,
        visited: HashSet::new(),
        collected: Vec::new(),
        processed: 0,
        skipped: Vec::new(),
    };

    for reference in &discovery.sitemaps {
        if ctx.exhausted() {
            tracing::info!("URL budget of {} reached, stopping traversal", ctx.budget);
            break;
        }
        ctx.collect(reference.url.clone()).await;
    }

    let FrontierContext {
        collected,
        processed,
        skipped,
        ..
    } = ctx;

    let mut seen = HashSet::new();
    let mut frontier: Vec<FrontierUrl> = collected
        .into_iter()
        .filter(|entry| seen.insert(entry.url.clone()))
        .collect();

    let available = frontier.len();
    if available > effective_limit {
        frontier.truncate(effective_limit);
        warnings.push(format!(
            "Frontier truncated to {} URLs ({} available)",
            effective_limit, available
        ));
    }

    if !skipped.is_empty() {
        warnings.push(format!(
            "Skipped {} sitemap document(s) that could not be fetched or parsed",
            skipped.len()
        ));
    }

    tracing::info!(
        "Built frontier of {} URL(s) for {} from {} sitemap document(s)",
        frontier.len(),
        seed,
        processed
    );

    Ok(Frontier {
        seed_url: seed,
        total_urls: frontier.len(),
        frontier,
        sitemaps_processed: processed,
        rules_applied: rules,
        skipped,
        warnings,
    })
}
