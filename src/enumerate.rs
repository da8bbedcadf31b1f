//! Sitemap enumeration
//!
//! Pages through the records of one sitemap document. Pagination is purely
//! positional: every call re-fetches the document and slices
//! `[offset, offset + page_size)` out of its records.

use crate::sitemap::{fetch_document, Fetcher, SitemapEntry};
use crate::url::{validate_url, Cursor};
use crate::SitemapError;
use serde::Serialize;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Largest page size a caller may ask for
pub const MAX_PAGE_SIZE: usize = 1000;

/// One page of sitemap records
#[derive(Debug, Clone, Serialize)]
pub struct SitemapPage {
    pub sitemap_url: String,

    #[serde(rename = "urls")]
    pub entries: Vec<SitemapEntry>,

    pub total_in_page: usize,

    pub is_index: bool,

    /// Offset of the first record in this page
    #[serde(skip)]
    pub offset: u64,

    /// Cursor for the following page, absent on the last page
    #[serde(skip)]
    pub next_cursor: Option<String>,
}

/// Enumerates one page of a sitemap document
///
/// # Arguments
///
/// * `fetcher` - Source of documents
/// * `sitemap_url` - Absolute http(s) URL of the sitemap or sitemap index
/// * `page_size` - Records per page, `1..=1000`; defaults to 100
/// * `cursor` - Token returned as `next_cursor` by a previous call
///
/// # Returns
///
/// * `Ok(SitemapPage)` - The requested page
/// * `Err(SitemapError::InvalidInput)` - Bad URL, page size or cursor
/// * `Err(_)` - The fetch or parse failed; this error is never swallowed
pub async fn enumerate(
    fetcher: &dyn Fetcher,
    sitemap_url: &str,
    page_size: Option<usize>,
    cursor: Option<&str>,
) -> crate::Result<SitemapPage> {
    let sitemap_url = sitemap_url.trim();
    if sitemap_url.is_empty() || !validate_url(sitemap_url) {
        return Err(SitemapError::InvalidInput(format!(
            "sitemap_url must be a valid http(s) URL, got {:?}",
            sitemap_url
        )));
    }

    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(SitemapError::InvalidInput(format!(
            "limit must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, page_size
        )));
    }

    let offset = match cursor {
        Some(token) => {
            Cursor::decode(token)
                .ok_or_else(|| SitemapError::InvalidInput("Invalid cursor".to_string()))?
                .offset
        }
        None => 0,
    };

    let document = fetch_document(fetcher, sitemap_url).await?;
    let is_index = document.is_index();
    let entries = document.into_entries();
    let total = entries.len() as u64;

    let start = offset.min(total) as usize;
    let page: Vec<SitemapEntry> = entries.into_iter().skip(start).take(page_size).collect();

    let next_offset = offset.saturating_add(page_size as u64);
    let next_cursor = if next_offset < total {
        Some(Cursor::at(next_offset).encode()?)
    } else {
        None
    };

    tracing::info!(
        "Listed {} of {} record(s) from {} starting at {}",
        page.len(),
        total,
        sitemap_url,
        offset
    );

    Ok(SitemapPage {
        sitemap_url: sitemap_url.to_string(),
        total_in_page: page.len(),
        entries: page,
        is_index,
        offset,
        next_cursor,
    })
}
