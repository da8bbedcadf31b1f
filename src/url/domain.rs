use url::Url;

/// Returns the origin (`scheme://host[:port]`) of a URL
///
/// Default ports are omitted, and the result never has a trailing slash, so
/// well-known paths can be appended directly.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitemap_frontier::url::origin_of;
///
/// let url = Url::parse("https://Example.COM/blog/post?x=1").unwrap();
/// assert_eq!(origin_of(&url), "https://example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(origin_of(&url), "http://127.0.0.1:8080");
/// ```
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}
