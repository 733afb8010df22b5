//! Configuration for analysis requests

use analyzer_core::DEFAULT_HEADLINE_CAP;
use analyzer_utils::{env_parse, env_string};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, StockError};
use crate::provider::HistoryRange;

/// Upper bound accepted for `max_headlines`
pub const MAX_HEADLINES_LIMIT: usize = 20;

pub const ENV_HISTORY_RANGE: &str = "ANALYZER_HISTORY_RANGE";
pub const ENV_MAX_HEADLINES: &str = "ANALYZER_MAX_HEADLINES";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ANALYZER_REQUEST_TIMEOUT_SECS";
pub const ENV_CACHE_TTL_SECS: &str = "ANALYZER_CACHE_TTL_SECS";
pub const ENV_NEWS_TTL_SECS: &str = "ANALYZER_NEWS_TTL_SECS";
pub const ENV_NEWS_RATE_LIMIT: &str = "ANALYZER_NEWS_RATE_LIMIT";

/// Configuration for analysis requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Trailing price history to request
    pub history_range: HistoryRange,

    /// Headlines kept per analysis
    pub max_headlines: usize,

    /// Request timeout duration
    pub request_timeout: Duration,

    /// Cache TTL for price history and profile
    pub cache_ttl_realtime: Duration,

    /// Cache TTL for headlines
    pub cache_ttl_news: Duration,

    /// Headline requests per minute
    pub news_rate_limit: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            history_range: HistoryRange::SixMonths,
            max_headlines: DEFAULT_HEADLINE_CAP,
            request_timeout: Duration::from_secs(30),
            cache_ttl_realtime: Duration::from_secs(60), // 1 minute
            cache_ttl_news: Duration::from_secs(300),    // 5 minutes
            news_rate_limit: 60,
        }
    }
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Defaults overridden by `ANALYZER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env()?.build()
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_headlines == 0 || self.max_headlines > MAX_HEADLINES_LIMIT {
            return Err(StockError::ConfigError(format!(
                "max_headlines must be between 1 and {MAX_HEADLINES_LIMIT}, got {}",
                self.max_headlines
            )));
        }

        if self.news_rate_limit == 0 {
            return Err(StockError::ConfigError(
                "news_rate_limit must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(StockError::ConfigError(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for AnalyzerConfig
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    history_range: Option<HistoryRange>,
    max_headlines: Option<usize>,
    request_timeout: Option<Duration>,
    cache_ttl_realtime: Option<Duration>,
    cache_ttl_news: Option<Duration>,
    news_rate_limit: Option<u32>,
}

impl AnalyzerConfigBuilder {
    pub fn history_range(mut self, range: HistoryRange) -> Self {
        self.history_range = Some(range);
        self
    }

    pub fn max_headlines(mut self, max: usize) -> Self {
        self.max_headlines = Some(max);
        self
    }

    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    pub fn cache_ttl_realtime(mut self, duration: Duration) -> Self {
        self.cache_ttl_realtime = Some(duration);
        self
    }

    pub fn cache_ttl_news(mut self, duration: Duration) -> Self {
        self.cache_ttl_news = Some(duration);
        self
    }

    pub fn news_rate_limit(mut self, per_minute: u32) -> Self {
        self.news_rate_limit = Some(per_minute);
        self
    }

    /// Fill unset fields from `ANALYZER_*` environment variables
    pub fn with_env(mut self) -> Result<Self> {
        if self.history_range.is_none() {
            if let Some(range) = env_string(ENV_HISTORY_RANGE) {
                self.history_range = Some(range.parse()?);
            }
        }
        if self.max_headlines.is_none() {
            self.max_headlines = env_parse(ENV_MAX_HEADLINES)?;
        }
        if self.request_timeout.is_none() {
            self.request_timeout = env_parse(ENV_REQUEST_TIMEOUT_SECS)?.map(Duration::from_secs);
        }
        if self.cache_ttl_realtime.is_none() {
            self.cache_ttl_realtime = env_parse(ENV_CACHE_TTL_SECS)?.map(Duration::from_secs);
        }
        if self.cache_ttl_news.is_none() {
            self.cache_ttl_news = env_parse(ENV_NEWS_TTL_SECS)?.map(Duration::from_secs);
        }
        if self.news_rate_limit.is_none() {
            self.news_rate_limit = env_parse(ENV_NEWS_RATE_LIMIT)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Result<AnalyzerConfig> {
        let defaults = AnalyzerConfig::default();

        let config = AnalyzerConfig {
            history_range: self.history_range.unwrap_or(defaults.history_range),
            max_headlines: self.max_headlines.unwrap_or(defaults.max_headlines),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            cache_ttl_realtime: self.cache_ttl_realtime.unwrap_or(defaults.cache_ttl_realtime),
            cache_ttl_news: self.cache_ttl_news.unwrap_or(defaults.cache_ttl_news),
            news_rate_limit: self.news_rate_limit.unwrap_or(defaults.news_rate_limit),
        };

        config.validate()?;
        Ok(config)
    }
}
