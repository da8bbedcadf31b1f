//! Crawl frontier module
//!
//! This module assembles the crawl frontier for a seed URL:
//! - Normalizing and validating the caller's filter rules
//! - Walking every discovered sitemap tree depth-first under a URL budget
//! - Filtering, deduplicating and capping the collected page URLs

mod builder;
mod rules;

pub use builder::{build_frontier, Frontier, FrontierUrl};
pub use rules::{AppliedRules, FrontierRules, DEFAULT_MAX_URLS, MAX_URLS_CAP};
