//! Sitemap document module
//!
//! This module covers everything about a single sitemap document:
//! - The data model for sitemap entries, index entries and discovered references
//! - Fetching over HTTP behind the [`Fetcher`] trait
//! - Transparent gzip inflation
//! - Parsing and classifying `<urlset>` / `<sitemapindex>` XML

mod document;
mod fetcher;
mod parser;
mod types;

#[cfg(test)]
pub(crate) mod stub;

pub use document::{decode_body, fetch_document};
pub use fetcher::{build_http_client, FetchedResource, Fetcher, HttpFetcher};
pub use parser::parse_sitemap;
pub use types::{
    DiscoverySource, IndexEntry, SitemapDocument, SitemapEntry, SitemapKind, SitemapReference,
    SkippedDocument,
};
