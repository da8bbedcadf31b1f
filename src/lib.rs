//! Sitemap Frontier: sitemap discovery and crawl-frontier assembly
//!
//! This crate discovers the sitemap documents of a web domain, enumerates
//! entries of individual sitemaps page by page, and assembles a filtered,
//! deduplicated, size-bounded list of candidate URLs for downstream crawling.

pub mod config;
pub mod discovery;
pub mod enumerate;
pub mod frontier;
pub mod robots;
pub mod service;
pub mod sitemap;
pub mod url;

use serde::Serialize;
use thiserror::Error;

/// Main error type for sitemap operations
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Upstream returned HTTP {status} for {url}")]
    Upstream { url: String, status: u16 },

    #[error("Rate limited by upstream for {url}")]
    RateLimited { url: String },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Failed to parse sitemap at {url}: {message}")]
    Parse { url: String, message: String },

    #[error("Network failure for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SitemapError {
    /// Returns the wire-level error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_) | Self::UrlError(_) => ErrorCode::InvalidInput,
            Self::Upstream { .. } => ErrorCode::UpstreamError,
            Self::RateLimited { .. } => ErrorCode::RateLimited,
            Self::Timeout { .. } | Self::Network { .. } => ErrorCode::Timeout,
            Self::Parse { .. } => ErrorCode::ParseError,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }
}

/// Error codes reported in error envelopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidInput,
    UpstreamError,
    RateLimited,
    Timeout,
    ParseError,
    InternalError,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {value}")]
    EnvOverride { var: String, value: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for sitemap operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{Config, HttpConfig};
pub use discovery::{discover, Discovery};
pub use enumerate::{enumerate, SitemapPage};
pub use frontier::{build_frontier, Frontier, FrontierRules, FrontierUrl};
pub use service::SitemapService;
pub use sitemap::{Fetcher, HttpFetcher, SitemapDocument, SitemapEntry, SitemapReference};
pub use url::{match_pattern, normalize_input, validate_url, Cursor};
