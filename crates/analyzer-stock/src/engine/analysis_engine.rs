//! Company analysis engine: providers in, scored analysis out

use analyzer_core::{
    AnalysisError, Headline, HeadlineSet, IndicatorParams, LexiconScorer, PolarityScorer,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use super::result::{ChartData, CompanyAnalysis};
use crate::api::{YahooFinanceClient, YahooNewsClient};
use crate::cache::{CacheKey, CacheManager};
use crate::config::AnalyzerConfig;
use crate::error::{Result, StockError};
use crate::provider::{HeadlineProvider, MarketData, MarketDataProvider};
use crate::symbol::normalize_symbol;

/// Runs one analysis per call; holds no per-request state
pub struct AnalysisEngine {
    market: Arc<dyn MarketDataProvider>,
    news: Arc<dyn HeadlineProvider>,
    scorer: Arc<dyn PolarityScorer>,
    config: Arc<AnalyzerConfig>,
    caches: CacheManager,
}

impl AnalysisEngine {
    /// Create an engine over the given providers and scorer
    pub fn new(
        config: Arc<AnalyzerConfig>,
        market: Arc<dyn MarketDataProvider>,
        news: Arc<dyn HeadlineProvider>,
        scorer: Arc<dyn PolarityScorer>,
    ) -> Self {
        let caches = CacheManager::new(config.cache_ttl_realtime, config.cache_ttl_news);
        Self {
            market,
            news,
            scorer,
            config,
            caches,
        }
    }

    /// Engine backed by Yahoo Finance and the built-in lexicon scorer
    pub fn with_yahoo(config: Arc<AnalyzerConfig>) -> Result<Self> {
        let market = Arc::new(YahooFinanceClient::new(config.request_timeout)?);
        let news = Arc::new(YahooNewsClient::new(
            config.news_rate_limit,
            config.request_timeout,
        )?);
        Ok(Self::new(config, market, news, Arc::new(LexiconScorer::new())))
    }

    /// Get the active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one ticker
    ///
    /// Market-data failures abort the request as `DataUnavailable` with the
    /// provider error attached. Headline failures are logged and the analysis
    /// continues with no headlines.
    pub async fn analyze(&self, raw_symbol: &str) -> Result<CompanyAnalysis> {
        let symbol = normalize_symbol(raw_symbol)?;
        info!(symbol = %symbol, range = %self.config.history_range, "Analyzing");

        let (market, headlines) = tokio::join!(
            self.fetch_market_data(&symbol),
            self.fetch_headlines(&symbol)
        );
        let market = market?;
        let headlines = HeadlineSet::capped(headlines, self.config.max_headlines);

        let analysis = analyzer_core::analyze(&market.series, &headlines, self.scorer.as_ref())?;
        let chart = ChartData::new(
            &market.series,
            IndicatorParams::default().sma_window,
            &analysis,
        )?;

        let result = CompanyAnalysis {
            profile: market.profile,
            analysis,
            headlines,
            chart,
            analyzed_at: Utc::now(),
        };
        info!(summary = %result.summary(), "Analysis complete");
        Ok(result)
    }

    async fn fetch_market_data(&self, symbol: &str) -> Result<MarketData> {
        let range = self.config.history_range;
        let key = CacheKey::market(symbol, range);

        self.caches
            .market
            .get_or_fetch(key, || self.market.fetch_market_data(symbol, range))
            .await
            .map_err(|e| {
                warn!(symbol, error = %e, "Market data unavailable");
                StockError::from(AnalysisError::data_unavailable(symbol, e))
            })
    }

    async fn fetch_headlines(&self, symbol: &str) -> Vec<Headline> {
        let limit = self.config.max_headlines;
        let key = CacheKey::headlines(symbol, limit);

        match self
            .caches
            .news
            .get_or_fetch(key, || self.news.fetch_headlines(symbol, limit))
            .await
        {
            Ok(headlines) => headlines,
            Err(e) => {
                warn!(symbol, error = %e, "Headline fetch failed, continuing without news");
                Vec::new()
            }
        }
    }
}
