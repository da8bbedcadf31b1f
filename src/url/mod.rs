//! URL handling module for Sitemap Frontier
//!
//! This module provides URL validation and normalization, origin extraction,
//! glob-style URL pattern matching, and opaque pagination cursors.

mod cursor;
mod domain;
mod matcher;
mod normalize;

// Re-export main functions
pub use cursor::Cursor;
pub use domain::origin_of;
pub use matcher::{match_pattern, UrlPattern};
pub use normalize::{normalize_input, parse_http_url, validate_url};
