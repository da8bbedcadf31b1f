//! Robots.txt handling module
//!
//! This module fetches a domain's robots.txt and extracts the `Sitemap:`
//! directives it advertises.

mod parser;

pub use parser::ParsedRobots;

use crate::sitemap::Fetcher;

/// Fetches robots.txt for a domain origin
///
/// # Arguments
///
/// * `fetcher` - The fetcher to issue the request with
/// * `origin` - The domain origin, e.g. `https://example.com`
///
/// # Returns
///
/// * `Ok(ParsedRobots)` - Successfully fetched and parsed robots.txt
/// * `Err(SitemapError)` - Failed to fetch (including non-2xx responses)
pub async fn fetch_robots(fetcher: &dyn Fetcher, origin: &str) -> crate::Result<ParsedRobots> {
    let url = format!("{}/robots.txt", origin);
    let resource = fetcher.fetch(&url).await?;
    let content = String::from_utf8_lossy(&resource.body);
    Ok(ParsedRobots::from_content(&content))
}
