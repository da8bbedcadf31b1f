//! Sitemap discovery module
//!
//! Finds every sitemap document reachable for a domain by probing the
//! well-known locations, reading `Sitemap:` directives from robots.txt and
//! recursively expanding sitemap indexes.

mod discoverer;

pub use discoverer::{discover, Discovery, ALTERNATIVE_LOCATIONS, NO_SITEMAPS_WARNING};
