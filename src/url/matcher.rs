use regex::{Regex, RegexBuilder};

/// A compiled glob pattern for matching whole URLs
///
/// `*` matches any run of characters (including none). Every other character
/// matches itself, case-insensitively. The pattern is anchored at both ends.
/// If the translated matcher cannot be compiled, the pattern degrades to a
/// literal substring test on the pattern text with `*` removed.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    original: String,
    matcher: PatternMatcher,
}

#[derive(Debug, Clone)]
enum PatternMatcher {
    Glob(Regex),
    Contains(String),
}

impl UrlPattern {
    /// Compiles a glob pattern
    pub fn new(pattern: &str) -> Self {
        let matcher = match compile_glob(pattern) {
            Ok(regex) => PatternMatcher::Glob(regex),
            Err(e) => {
                tracing::debug!("Pattern {:?} fell back to substring matching: {}", pattern, e);
                PatternMatcher::Contains(pattern.replace('*', ""))
            }
        };

        Self {
            original: pattern.to_string(),
            matcher,
        }
    }

    /// Returns the pattern text this matcher was built from
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Returns true if `url` matches this pattern
    pub fn matches(&self, url: &str) -> bool {
        match &self.matcher {
            PatternMatcher::Glob(regex) => regex.is_match(url),
            PatternMatcher::Contains(literal) => url.contains(literal.as_str()),
        }
    }
}

/// Checks if a URL matches a glob pattern
///
/// # Examples
///
/// ```
/// use sitemap_frontier::url::match_pattern;
///
/// assert!(match_pattern("https://example.com/blog/post", "*blog*"));
/// assert!(match_pattern("https://example.com/blog/2024/post", "*blog*post*"));
/// assert!(!match_pattern("https://example.com/page", "https://other.com/*"));
/// ```
pub fn match_pattern(url: &str, pattern: &str) -> bool {
    UrlPattern::new(pattern).matches(url)
}

/// Translates a glob into an anchored, case-insensitive regex
fn compile_glob(pattern: &str) -> Result<Regex, regex::Error> {
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    out.push('^');

    for (i, literal) in pattern.split('*').enumerate() {
        if i > 0 {
            out.push_str(".*");
        }
        out.push_str(&regex::escape(literal));
    }

    out.push('$');
    RegexBuilder::new(&out)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
}
