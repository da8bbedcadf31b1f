use crate::{UrlError, UrlResult};
use url::Url;

/// Parses `url_str` as an absolute `http`/`https` URL
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(UrlError)` - The string is not an absolute http(s) URL with a host
pub fn parse_http_url(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Returns true iff `url_str` parses as an absolute `http`/`https` URL
///
/// # Examples
///
/// ```
/// use sitemap_frontier::url::validate_url;
///
/// assert!(validate_url("https://example.com/sitemap.xml"));
/// assert!(!validate_url("ftp://example.com/sitemap.xml"));
/// assert!(!validate_url("example.com"));
/// ```
pub fn validate_url(url_str: &str) -> bool {
    parse_http_url(url_str).is_ok()
}

/// Normalizes user input into an absolute URL string
///
/// Trims surrounding whitespace and prepends `https://` when no `http://` or
/// `https://` prefix is present. The input itself is otherwise returned
/// unchanged, so `"example.com"` becomes `"https://example.com"` without a
/// trailing slash.
///
/// # Returns
///
/// * `Some(String)` - The normalized URL, which passes [`validate_url`]
/// * `None` - The input is empty or cannot be made into a valid URL
///
/// # Examples
///
/// ```
/// use sitemap_frontier::url::normalize_input;
///
/// assert_eq!(normalize_input("example.com").as_deref(), Some("https://example.com"));
/// assert_eq!(normalize_input("  example.com  ").as_deref(), Some("https://example.com"));
/// assert_eq!(normalize_input(""), None);
/// ```
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let candidate = if has_http_prefix(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    validate_url(&candidate).then_some(candidate)
}

fn has_http_prefix(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
