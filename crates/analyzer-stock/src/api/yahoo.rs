//! Yahoo Finance market-data client

use analyzer_core::{PricePoint, PriceSeries};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{debug, warn};
use url::Url;
use yahoo_finance_api as yahoo;

use crate::error::{Result, StockError};
use crate::provider::{CompanyProfile, HistoryRange, MarketData, MarketDataProvider};

const QUOTE_URL: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

/// Browser-like agent; Yahoo rejects requests without one
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Yahoo Finance API client
pub struct YahooFinanceClient {
    http: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteEnvelope {
    quote_response: QuoteResponse,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    result: Vec<QuoteItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteItem {
    symbol: String,
    short_name: Option<String>,
    long_name: Option<String>,
    market_cap: Option<f64>,
    regular_market_price: Option<f64>,
}

impl YahooFinanceClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Daily closing prices between `start` and `end`
    pub async fn get_historical_quotes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PriceSeries> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| StockError::YahooFinanceError(e.to_string()))?;

        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| StockError::YahooFinanceError(format!("Invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| StockError::YahooFinanceError(format!("Invalid end timestamp: {e}")))?;

        let response = provider
            .get_quote_history(symbol, start_odt, end_odt)
            .await
            .map_err(|e| StockError::YahooFinanceError(e.to_string()))?;

        let quotes = response
            .quotes()
            .map_err(|e| StockError::YahooFinanceError(e.to_string()))?;

        let points = quotes
            .iter()
            .filter(|q| q.close.is_finite())
            .filter_map(|q| {
                DateTime::from_timestamp(q.timestamp as i64, 0).map(|ts| PricePoint::new(ts, q.close))
            })
            .collect();

        Ok(PriceSeries::new(points))
    }

    /// Name, market cap and live price; `None` fields when Yahoo omits them
    pub async fn get_company_profile(&self, symbol: &str) -> Result<CompanyProfile> {
        let url = Url::parse_with_params(QUOTE_URL, &[("symbols", symbol)])
            .map_err(|e| StockError::ApiError(format!("Invalid quote URL: {e}")))?;

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            return Err(StockError::ApiError(format!(
                "Yahoo quote endpoint returned {status}"
            )));
        }

        let body = response.text().await?;
        parse_profile(symbol, &body)
    }
}

fn parse_profile(symbol: &str, body: &str) -> Result<CompanyProfile> {
    let envelope: QuoteEnvelope = serde_json::from_str(body)?;
    let item = envelope
        .quote_response
        .result
        .into_iter()
        .find(|q| q.symbol.eq_ignore_ascii_case(symbol));

    Ok(match item {
        Some(q) => CompanyProfile {
            symbol: symbol.to_string(),
            name: q.short_name.or(q.long_name),
            market_cap: q.market_cap,
            current_price: q.regular_market_price,
        },
        None => CompanyProfile::bare(symbol),
    })
}

#[async_trait]
impl MarketDataProvider for YahooFinanceClient {
    async fn fetch_market_data(&self, symbol: &str, range: HistoryRange) -> Result<MarketData> {
        let end = Utc::now();
        let series = self
            .get_historical_quotes(symbol, range.start(end), end)
            .await?;

        if series.is_empty() {
            return Err(StockError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "No historical data available".to_string(),
            });
        }
        debug!(symbol, points = series.len(), %range, "Fetched price history");

        let mut profile = match self.get_company_profile(symbol).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(symbol, error = %e, "Company profile unavailable, using symbol only");
                CompanyProfile::bare(symbol)
            }
        };
        if profile.current_price.is_none() {
            profile.current_price = series.latest().map(|p| p.close);
        }

        Ok(MarketData { profile, series })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let body = r#"{"quoteResponse":{"result":[{"symbol":"AAPL","shortName":"Apple Inc.",
            "marketCap":3.1e12,"regularMarketPrice":227.5}],"error":null}}"#;
        let profile = parse_profile("AAPL", body).unwrap();

        assert_eq!(profile.name.as_deref(), Some("Apple Inc."));
        assert_eq!(profile.market_cap, Some(3.1e12));
        assert_eq!(profile.current_price, Some(227.5));
    }

    #[test]
    fn test_parse_profile_missing_symbol() {
        let body = r#"{"quoteResponse":{"result":[],"error":null}}"#;
        assert_eq!(parse_profile("ZZZZ", body).unwrap(), CompanyProfile::bare("ZZZZ"));
    }

    #[test]
    fn test_parse_profile_long_name_fallback() {
        let body = r#"{"quoteResponse":{"result":[{"symbol":"SAP.DE","longName":"SAP SE"}]}}"#;
        let profile = parse_profile("SAP.DE", body).unwrap();
        assert_eq!(profile.name.as_deref(), Some("SAP SE"));
        assert_eq!(profile.market_cap, None);
    }

    #[test]
    fn test_parse_profile_bad_json() {
        assert!(matches!(
            parse_profile("AAPL", "<html>"),
            Err(StockError::JsonError(_))
        ));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_market_data() {
        let client = YahooFinanceClient::new(Duration::from_secs(30)).unwrap();
        let data = client
            .fetch_market_data("AAPL", HistoryRange::SixMonths)
            .await
            .unwrap();

        assert!(data.series.len() > 100);
        assert_eq!(data.profile.symbol, "AAPL");
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_unknown_symbol_is_error() {
        let client = YahooFinanceClient::new(Duration::from_secs(30)).unwrap();
        let result = client
            .fetch_market_data("INVALID_SYMBOL_12345", HistoryRange::OneMonth)
            .await;
        assert!(result.is_err());
    }
}
