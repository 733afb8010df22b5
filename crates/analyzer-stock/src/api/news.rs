//! Yahoo Finance headline client

use analyzer_core::Headline;
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::yahoo::USER_AGENT;
use crate::error::{Result, StockError};
use crate::provider::HeadlineProvider;

const SEARCH_URL: &str = "https://query2.finance.yahoo.com/v1/finance/search";

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// A news item from the Yahoo search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooNewsItem {
    /// News headline
    #[serde(default)]
    pub title: String,
    /// Publisher name
    #[serde(default)]
    pub publisher: Option<String>,
    /// Article URL
    #[serde(default)]
    pub link: Option<String>,
    /// Publish time (UNIX timestamp)
    #[serde(default)]
    pub provider_publish_time: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    news: Vec<YahooNewsItem>,
}

/// Headline client with rate limiting
pub struct YahooNewsClient {
    client: Client,
    rate_limiter: SharedRateLimiter,
}

impl YahooNewsClient {
    /// Create a client allowing `rate_limit` requests per minute
    pub fn new(rate_limit: u32, timeout: Duration) -> Result<Self> {
        let per_minute = NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_minute(per_minute)));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    /// Latest news items mentioning `symbol`
    pub async fn get_company_news(&self, symbol: &str, limit: usize) -> Result<Vec<YahooNewsItem>> {
        self.rate_limiter.until_ready().await;

        let url = Url::parse_with_params(
            SEARCH_URL,
            &[
                ("q", symbol.to_string()),
                ("quotesCount", "0".to_string()),
                ("newsCount", limit.to_string()),
            ],
        )
        .map_err(|e| StockError::ApiError(format!("Invalid search URL: {e}")))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StockError::ApiError(format!("Yahoo news request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StockError::ApiError(format!(
                "Yahoo news API error {status}: {body}"
            )));
        }

        let body = response.text().await?;
        let mut items = parse_news(&body)?;
        items.truncate(limit);
        Ok(items)
    }
}

fn parse_news(body: &str) -> Result<Vec<YahooNewsItem>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.news)
}

#[async_trait]
impl HeadlineProvider for YahooNewsClient {
    async fn fetch_headlines(&self, symbol: &str, limit: usize) -> Result<Vec<Headline>> {
        let items = self.get_company_news(symbol, limit).await?;
        debug!(symbol, count = items.len(), "Fetched headlines");
        Ok(items.into_iter().map(|item| Headline::new(item.title)).collect())
    }
}
