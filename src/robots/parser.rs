//! Robots.txt parser implementation
//!
//! Only `Sitemap:` directives are interpreted. They are group-independent, so
//! every matching line in the file counts regardless of `User-agent` sections.

/// Parsed robots.txt data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRobots {
    sitemaps: Vec<String>,
}

impl ParsedRobots {
    /// Parses raw robots.txt content
    ///
    /// A directive is any line whose trimmed text starts with `sitemap:`
    /// (case-insensitive). The rest of the line, trimmed, is the sitemap URL.
    /// Directives with an empty value are skipped.
    pub fn from_content(content: &str) -> Self {
        let sitemaps = content
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim();
                let prefix = trimmed.get(..8)?;
                if !prefix.eq_ignore_ascii_case("sitemap:") {
                    return None;
                }
                let value = trimmed[8..].trim();
                (!value.is_empty()).then(|| value.to_string())
            })
            .collect();

        Self { sitemaps }
    }

    /// Returns the sitemap URLs in the order they appear in the file
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }
}
