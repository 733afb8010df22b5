//! TTL caches in front of the market-data and headline providers

use analyzer_core::Headline;
use cached::{Cached, TimedCache};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

use crate::provider::{HistoryRange, MarketData};

/// Identifies one provider request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Market { symbol: String, range: HistoryRange },
    Headlines { symbol: String, limit: usize },
}

impl CacheKey {
    /// Key for a price history request
    pub fn market(symbol: impl Into<String>, range: HistoryRange) -> Self {
        Self::Market {
            symbol: symbol.into(),
            range,
        }
    }

    /// Key for a headline request
    pub fn headlines(symbol: impl Into<String>, limit: usize) -> Self {
        Self::Headlines {
            symbol: symbol.into(),
            limit,
        }
    }

    /// Get the symbol the request was for
    pub fn symbol(&self) -> &str {
        match self {
            Self::Market { symbol, .. } | Self::Headlines { symbol, .. } => symbol,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market { symbol, range } => write!(f, "market:{symbol}:{range}"),
            Self::Headlines { symbol, limit } => write!(f, "headlines:{symbol}:{limit}"),
        }
    }
}

/// Shared TTL cache; clones point at the same storage
pub struct StockCache<V> {
    entries: Arc<RwLock<TimedCache<CacheKey, V>>>,
}

impl<V: Clone> StockCache<V> {
    /// Create a new cache whose entries expire after `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(TimedCache::with_lifespan(ttl))),
        }
    }

    /// Get a live entry
    pub async fn get(&self, key: &CacheKey) -> Option<V> {
        // TimedCache evicts on read, so lookups take the write lock
        self.entries.write().await.cache_get(key).cloned()
    }

    /// Store `value`, replacing any entry for `key`
    pub async fn insert(&self, key: CacheKey, value: V) {
        let _ = self.entries.write().await.cache_set(key, value);
    }

    /// Cached value for `key`, or the result of `fetch` on a miss
    ///
    /// Only successful fetches are stored. The lookup and the store are not
    /// one atomic step: concurrent misses on the same key each call `fetch`,
    /// and the last result wins.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: CacheKey, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(hit) = self.get(&key).await {
            debug!(key = %key, "cache hit");
            return Ok(hit);
        }
        debug!(key = %key, "cache miss");

        let value = fetch().await?;
        self.insert(key, value.clone()).await;
        Ok(value)
    }

    /// Remove the entry for `key`
    pub async fn invalidate(&self, key: &CacheKey) {
        let _ = self.entries.write().await.cache_remove(key);
    }

    /// Remove all entries
    pub async fn clear(&self) {
        self.entries.write().await.cache_clear();
    }

    /// Number of stored entries, expired ones included until next access
    pub async fn len(&self) -> usize {
        self.entries.read().await.cache_size()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<V> Clone for StockCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

/// Caches for the two provider calls made per analysis
pub struct CacheManager {
    /// Price history and profile
    pub market: StockCache<MarketData>,
    /// Headlines, usually kept longer than prices
    pub news: StockCache<Vec<Headline>>,
}

impl CacheManager {
    /// Create caches with the given market and news lifetimes
    pub fn new(market_ttl: Duration, news_ttl: Duration) -> Self {
        Self {
            market: StockCache::new(market_ttl),
            news: StockCache::new(news_ttl),
        }
    }

    /// Clear both caches
    pub async fn clear_all(&self) {
        self.market.clear().await;
        self.news.clear().await;
    }
}
