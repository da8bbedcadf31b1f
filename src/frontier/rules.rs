use crate::url::UrlPattern;
use crate::SitemapError;
use serde::{Deserialize, Serialize};

/// `max_urls` used when the caller gives none
pub const DEFAULT_MAX_URLS: u64 = 5000;

/// Hard upper bound on `max_urls` and on the per-call limit
pub const MAX_URLS_CAP: u64 = 10_000;

/// Filter rules as supplied by the caller
///
/// Every field is optional; see [`FrontierRules::normalize`] for defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FrontierRules {
    #[serde(default)]
    pub include: Option<Vec<String>>,

    #[serde(default)]
    pub exclude: Option<Vec<String>>,

    #[serde(default)]
    pub max_urls: Option<u64>,
}

/// Normalized rules with compiled patterns
///
/// Serializes as the `rules_applied` object of a frontier result.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedRules {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub max_urls: u64,

    #[serde(skip)]
    include_patterns: Vec<UrlPattern>,

    #[serde(skip)]
    exclude_patterns: Vec<UrlPattern>,
}

impl FrontierRules {
    /// Applies defaults and validates the rules
    ///
    /// * `include` / `exclude` default to empty; every pattern must be a
    ///   non-empty string
    /// * `max_urls` defaults to [`DEFAULT_MAX_URLS`], must be at least 1 and
    ///   is capped at [`MAX_URLS_CAP`]
    pub fn normalize(&self) -> crate::Result<AppliedRules> {
        let include = self.include.clone().unwrap_or_default();
        let exclude = self.exclude.clone().unwrap_or_default();
        check_patterns("Include", &include)?;
        check_patterns("Exclude", &exclude)?;

        let max_urls = self.max_urls.unwrap_or(DEFAULT_MAX_URLS);
        if max_urls < 1 {
            return Err(SitemapError::InvalidInput(
                "max_urls must be at least 1".to_string(),
            ));
        }

        Ok(AppliedRules {
            include_patterns: include.iter().map(|p| UrlPattern::new(p)).collect(),
            exclude_patterns: exclude.iter().map(|p| UrlPattern::new(p)).collect(),
            include,
            exclude,
            max_urls: max_urls.min(MAX_URLS_CAP),
        })
    }
}

fn check_patterns(list: &str, patterns: &[String]) -> crate::Result<()> {
    if patterns.iter().any(|p| p.is_empty()) {
        return Err(SitemapError::InvalidInput(format!(
            "{} patterns must be non-empty strings",
            list
        )));
    }
    Ok(())
}

impl AppliedRules {
    /// Returns true if `url` passes the include stage and no exclude pattern
    ///
    /// With no include patterns configured every URL passes the include stage.
    pub fn accepts(&self, url: &str) -> bool {
        let included = self.include_patterns.is_empty()
            || self.include_patterns.iter().any(|p| p.matches(url));
        included && !self.exclude_patterns.iter().any(|p| p.matches(url))
    }
}
