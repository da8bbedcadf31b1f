//! Configuration module for Sitemap Frontier
//!
//! This module handles loading, parsing, and validating the TOML configuration
//! file and applying environment overrides on top of it.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_frontier::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitemap-frontier.toml")).unwrap();
//! println!("Request timeout: {}ms", config.http.timeout_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig};

// Re-export parser functions
pub use parser::{
    compute_config_hash, load_config, load_config_with_hash, ENV_MAX_CONCURRENT_REQUESTS,
    ENV_TIMEOUT_MS, ENV_USER_AGENT,
};
pub use validation::validate;
