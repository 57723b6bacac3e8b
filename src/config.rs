use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:9000";
pub const DEFAULT_COUNTRY_CODE: &str = "us";

/// Caps applied by the search aggregator.
///
/// The product lookup fetches `product_fetch_limit` products and filters them
/// locally, since the store API has no full-text product search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub product_fetch_limit: usize,
    pub product_result_limit: usize,
    pub article_fetch_limit: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            product_fetch_limit: 100,
            product_result_limit: 10,
            article_fetch_limit: 50,
        }
    }
}

/// Storefront configuration read from environment variables.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the commerce backend (also serves the blog endpoints).
    pub backend_url: String,
    /// Publishable API key sent as `x-publishable-api-key`.
    pub publishable_key: Option<String>,
    /// Country code used when a request doesn't carry one.
    pub default_country_code: String,
    pub search_limits: SearchLimits,
    pub backend_timeout: Duration,
    /// Optional YAML file overriding the built-in static page registry.
    pub pages_file: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            publishable_key: None,
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            search_limits: SearchLimits::default(),
            backend_timeout: Duration::from_secs(10),
            pages_file: None,
        }
    }
}

impl StorefrontConfig {
    /// Build the config from environment variables.
    ///
    /// Recognized env vars (all optional):
    /// - `MEDUSA_BACKEND_URL`
    /// - `MEDUSA_PUBLISHABLE_KEY`
    /// - `DEFAULT_COUNTRY_CODE`
    /// - `SEARCH_PRODUCT_FETCH_LIMIT`, `SEARCH_PRODUCT_RESULT_LIMIT`,
    ///   `SEARCH_ARTICLE_FETCH_LIMIT`
    /// - `BACKEND_TIMEOUT_SECS`
    /// - `STOREFRONT_PAGES_FILE`
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (useful for testing).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let backend_url = value("MEDUSA_BACKEND_URL").unwrap_or(defaults.backend_url);
        url::Url::parse(&backend_url).map_err(|e| {
            AppError::Config(format!("MEDUSA_BACKEND_URL '{backend_url}' is not a valid URL: {e}"))
        })?;

        let search_limits = SearchLimits {
            product_fetch_limit: parse_or(
                value("SEARCH_PRODUCT_FETCH_LIMIT"),
                "SEARCH_PRODUCT_FETCH_LIMIT",
                defaults.search_limits.product_fetch_limit,
            )?,
            product_result_limit: parse_or(
                value("SEARCH_PRODUCT_RESULT_LIMIT"),
                "SEARCH_PRODUCT_RESULT_LIMIT",
                defaults.search_limits.product_result_limit,
            )?,
            article_fetch_limit: parse_or(
                value("SEARCH_ARTICLE_FETCH_LIMIT"),
                "SEARCH_ARTICLE_FETCH_LIMIT",
                defaults.search_limits.article_fetch_limit,
            )?,
        };

        let timeout_secs: u64 = parse_or(value("BACKEND_TIMEOUT_SECS"), "BACKEND_TIMEOUT_SECS", 10)?;

        Ok(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            publishable_key: value("MEDUSA_PUBLISHABLE_KEY"),
            default_country_code: value("DEFAULT_COUNTRY_CODE")
                .map(|c| c.to_lowercase())
                .unwrap_or(defaults.default_country_code),
            search_limits,
            backend_timeout: Duration::from_secs(timeout_secs),
            pages_file: value("STOREFRONT_PAGES_FILE").map(PathBuf::from),
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &str, default: T) -> Result<T, AppError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("{key} must be a non-negative integer, got '{raw}'"))),
    }
}
