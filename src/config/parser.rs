use crate::config::types::Config;
use crate::config::validation::validate;
use crate::{ConfigError, ConfigResult};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Environment variable overriding `http.timeout-ms`
pub const ENV_TIMEOUT_MS: &str = "SITEMAP_FRONTIER_TIMEOUT_MS";

/// Environment variable overriding `http.max-concurrent-requests`
pub const ENV_MAX_CONCURRENT_REQUESTS: &str = "SITEMAP_FRONTIER_MAX_CONCURRENT_REQUESTS";

/// Environment variable overriding `http.user-agent`
pub const ENV_USER_AGENT: &str = "SITEMAP_FRONTIER_USER_AGENT";

/// Loads a configuration file, layers environment overrides and validates
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - The effective configuration
/// * `Err(ConfigError)` - The file could not be read or parsed, an override
///   was malformed, or validation failed
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    parse_config(&std::fs::read_to_string(path)?)
}

/// Hex-encoded SHA-256 digest of a configuration file
pub fn compute_config_hash(path: &Path) -> ConfigResult<String> {
    Ok(digest(&std::fs::read_to_string(path)?))
}

/// Like [`load_config`], also returning the digest of the bytes it read
pub fn load_config_with_hash(path: &Path) -> ConfigResult<(Config, String)> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok((config, digest(&content)))
}

fn parse_config(content: &str) -> ConfigResult<Config> {
    let mut config: Config = toml::from_str(content)?;
    config.apply_env_overrides()?;
    validate(&config)?;
    Ok(config)
}

fn digest(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

impl Config {
    /// Builds the default configuration with environment overrides applied
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        validate(&config)?;
        Ok(config)
    }

    /// Applies `SITEMAP_FRONTIER_*` environment variables on top of this config
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides_from(|var| std::env::var(var).ok())
    }

    /// Applies overrides read through `lookup`
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_TIMEOUT_MS) {
            self.http.timeout_ms = parse_number(ENV_TIMEOUT_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_CONCURRENT_REQUESTS) {
            self.http.max_concurrent_requests = parse_number(ENV_MAX_CONCURRENT_REQUESTS, &value)?;
        }
        if let Some(value) = lookup(ENV_USER_AGENT) {
            let value = value.trim();
            if !value.is_empty() {
                self.http.user_agent = value.to_string();
            }
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(var: &str, value: &str) -> ConfigResult<T> {
    value.trim().parse().map_err(|_| ConfigError::EnvOverride {
        var: var.to_string(),
        value: value.to_string(),
    })
}
