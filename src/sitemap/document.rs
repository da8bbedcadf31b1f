use crate::sitemap::fetcher::{FetchedResource, Fetcher};
use crate::sitemap::parser::parse_sitemap;
use crate::sitemap::types::SitemapDocument;
use crate::SitemapError;
use flate2::read::GzDecoder;
use std::borrow::Cow;
use std::io::Read;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Fetches one sitemap document and classifies it
///
/// # Errors
///
/// * `Upstream` / `RateLimited` - non-2xx response
/// * `Timeout` - the request exceeded the configured deadline
/// * `Parse` - the body could not be inflated or is not a sitemap document
pub async fn fetch_document(fetcher: &dyn Fetcher, url: &str) -> crate::Result<SitemapDocument> {
    let resource = fetcher.fetch(url).await?;
    let body = decode_body(url, &resource)?;
    let text = String::from_utf8_lossy(&body);

    let document = parse_sitemap(&text).map_err(|message| SitemapError::Parse {
        url: url.to_string(),
        message,
    })?;

    tracing::debug!(
        "Parsed {} with {} {:?} record(s)",
        url,
        document.len(),
        document.kind()
    );
    Ok(document)
}

/// Returns the response body, inflated if it is declared gzip
///
/// A body is declared gzip when the URL ends in `.gz` or the content type
/// mentions gzip. Declared bodies that lack the gzip magic bytes were already
/// inflated in transit and are returned as-is.
pub fn decode_body<'a>(url: &str, resource: &'a FetchedResource) -> crate::Result<Cow<'a, [u8]>> {
    let declared = url.to_ascii_lowercase().ends_with(".gz")
        || resource
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("gzip"));

    if !declared || !resource.body.starts_with(&GZIP_MAGIC) {
        return Ok(Cow::Borrowed(&resource.body));
    }

    let mut decoder = GzDecoder::new(resource.body.as_slice());
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| SitemapError::Parse {
            url: url.to_string(),
            message: format!("failed to inflate gzip body: {}", e),
        })?;
    Ok(Cow::Owned(out))
}
