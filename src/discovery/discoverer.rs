use crate::robots::fetch_robots;
use crate::sitemap::{
    fetch_document, DiscoverySource, Fetcher, SitemapReference, SkippedDocument,
};
use crate::url::{normalize_input, origin_of, parse_http_url};
use crate::SitemapError;
use serde::Serialize;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use url::Url;

/// Locations probed after robots.txt, relative to the domain origin
pub const ALTERNATIVE_LOCATIONS: &[&str] = &[
    "/sitemap_index.xml",
    "/sitemap.xml.gz",
    "/sitemaps/sitemap.xml",
];

/// Warning attached when discovery finds nothing
pub const NO_SITEMAPS_WARNING: &str = "No sitemaps found for this domain";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result of a discovery run
#[derive(Debug, Clone, Serialize)]
pub struct Discovery {
    /// Origin of the normalized input, e.g. `https://example.com`
    pub domain: String,

    /// Every sitemap document that was fetched and classified, in probe order
    pub sitemaps: Vec<SitemapReference>,

    /// Whether robots.txt was fetched successfully
    pub robots_txt_found: bool,

    /// Candidates that were probed but could not be used
    #[serde(skip)]
    pub skipped: Vec<SkippedDocument>,

    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Traversal state for one discovery call
struct DiscoveryContext<'f> {
    fetcher: &'f dyn Fetcher,
    visited: HashSet<String>,
    sitemaps: Vec<SitemapReference>,
    skipped: Vec<SkippedDocument>,
}

impl<'f> DiscoveryContext<'f> {
    fn new(fetcher: &'f dyn Fetcher) -> Self {
        Self {
            fetcher,
            visited: HashSet::new(),
            sitemaps: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Fetches and classifies one candidate, then recurses into index children
    ///
    /// Each URL is fetched at most once per context. Failures exclude the
    /// candidate and are recorded in `skipped`.
    fn probe<'a>(&'a mut self, url: String, source: DiscoverySource) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            if !self.visited.insert(url.clone()) {
                return;
            }

            let document = match fetch_document(self.fetcher, &url).await {
                Ok(document) => document,
                Err(e) => {
                    tracing::debug!("Sitemap candidate {} excluded: {}", url, e);
                    self.skipped.push(SkippedDocument {
                        url,
                        reason: e.to_string(),
                    });
                    return;
                }
            };

            tracing::debug!("Found {:?} at {} via {:?}", document.kind(), url, source);
            let children: Vec<String> = document
                .child_urls()
                .into_iter()
                .map(str::to_string)
                .collect();

            self.sitemaps.push(SitemapReference {
                url,
                kind: document.kind(),
                discovered_from: source,
            });

            for child in children {
                self.probe(child, DiscoverySource::SitemapIndex).await;
            }
        })
    }
}

/// Discovers all sitemap documents for a domain
///
/// # Probe Order
///
/// 1. `{domain}/sitemap.xml`
/// 2. `Sitemap:` directives from `{domain}/robots.txt`
/// 3. [`ALTERNATIVE_LOCATIONS`]
///
/// Every index found along the way is expanded recursively. The
/// alternatives are always probed, even when earlier steps found sitemaps.
///
/// # Arguments
///
/// * `fetcher` - Source of documents
/// * `input` - A domain (`example.com`) or any URL on the domain
///
/// # Returns
///
/// * `Ok(Discovery)` - Discovery completed; it may have found nothing
/// * `Err(SitemapError::InvalidInput)` - The input is empty or not a valid URL
pub async fn discover(fetcher: &dyn Fetcher, input: &str) -> crate::Result<Discovery> {
    let normalized = normalize_input(input).ok_or_else(|| {
        SitemapError::InvalidInput(format!(
            "A valid domain or http(s) URL is required, got {:?}",
            input
        ))
    })?;
    let seed = parse_http_url(&normalized)?;
    let domain = origin_of(&seed);
    tracing::info!("Discovering sitemaps for {}", domain);

    let mut ctx = DiscoveryContext::new(fetcher);

    ctx.probe(format!("{}/sitemap.xml", domain), DiscoverySource::StandardLocation)
        .await;

    let robots_txt_found = match fetch_robots(fetcher, &domain).await {
        Ok(robots) => {
            for directive in robots.sitemaps() {
                match resolve_directive(&domain, directive) {
                    Some(url) => ctx.probe(url, DiscoverySource::RobotsTxt).await,
                    None => tracing::debug!("Ignoring unusable robots.txt sitemap {:?}", directive),
                }
            }
            true
        }
        Err(e) => {
            tracing::debug!("robots.txt unavailable for {}: {}", domain, e);
            false
        }
    };

    for location in ALTERNATIVE_LOCATIONS {
        ctx.probe(format!("{}{}", domain, location), DiscoverySource::StandardLocation)
            .await;
    }

    let mut warnings = Vec::new();
    if ctx.sitemaps.is_empty() {
        warnings.push(NO_SITEMAPS_WARNING.to_string());
    }

    tracing::info!(
        "Discovered {} sitemap(s) for {} (robots.txt found: {})",
        ctx.sitemaps.len(),
        domain,
        robots_txt_found
    );

    Ok(Discovery {
        domain,
        sitemaps: ctx.sitemaps,
        robots_txt_found,
        skipped: ctx.skipped,
        warnings,
    })
}

/// Resolves a robots.txt `Sitemap:` value against the domain origin
///
/// Absolute values are kept as written; relative values are joined onto the
/// origin.
fn resolve_directive(domain: &str, directive: &str) -> Option<String> {
    if parse_http_url(directive).is_ok() {
        return Some(directive.to_string());
    }
    let base = Url::parse(domain).ok()?;
    let joined = base.join(directive).ok()?;
    parse_http_url(joined.as_str()).ok()?;
    Some(joined.to_string())
}
