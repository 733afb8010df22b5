//! Data provider seams consumed by the analysis engine

use analyzer_core::{Headline, PriceSeries};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StockError};

/// Trailing window of daily history to request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryRange {
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "ytd")]
    YearToDate,
}

impl HistoryRange {
    /// Yahoo range string, e.g. `6mo`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FiveYears => "5y",
            Self::YearToDate => "ytd",
        }
    }

    /// First instant covered by the range when it ends at `end`
    pub fn start(self, end: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::OneMonth => end - Duration::days(30),
            Self::ThreeMonths => end - Duration::days(90),
            Self::SixMonths => end - Duration::days(180),
            Self::OneYear => end - Duration::days(365),
            Self::TwoYears => end - Duration::days(730),
            Self::FiveYears => end - Duration::days(1825),
            Self::YearToDate => NaiveDate::from_ymd_opt(end.year(), 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map_or(end - Duration::days(365), |d| d.and_utc()),
        }
    }
}

impl fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryRange {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1mo" => Ok(Self::OneMonth),
            "3mo" => Ok(Self::ThreeMonths),
            "6mo" => Ok(Self::SixMonths),
            "1y" => Ok(Self::OneYear),
            "2y" => Ok(Self::TwoYears),
            "5y" => Ok(Self::FiveYears),
            "ytd" => Ok(Self::YearToDate),
            other => Err(StockError::InvalidRange(format!(
                "{other} (expected one of 1mo, 3mo, 6mo, 1y, 2y, 5y, ytd)"
            ))),
        }
    }
}

/// Descriptive data about a listed company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub symbol: String,
    pub name: Option<String>,
    pub market_cap: Option<f64>,
    pub current_price: Option<f64>,
}

impl CompanyProfile {
    /// Profile with nothing but the symbol
    pub fn bare(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            market_cap: None,
            current_price: None,
        }
    }

    /// Display name, falling back to the symbol
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.symbol)
    }
}

/// Everything the market-data provider returns for one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub profile: CompanyProfile,
    pub series: PriceSeries,
}

/// Supplies price history and company metadata
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily closes for `range` plus the company profile.
    ///
    /// Unknown symbols and transport failures are errors, never partial data.
    async fn fetch_market_data(&self, symbol: &str, range: HistoryRange) -> Result<MarketData>;
}

/// Supplies recent headlines
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeadlineProvider: Send + Sync {
    async fn fetch_headlines(&self, symbol: &str, limit: usize) -> Result<Vec<Headline>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_parse() {
        assert_eq!("6mo".parse::<HistoryRange>().unwrap(), HistoryRange::SixMonths);
        assert_eq!(" YTD ".parse::<HistoryRange>().unwrap(), HistoryRange::YearToDate);
        assert!(matches!(
            "7wk".parse::<HistoryRange>(),
            Err(StockError::InvalidRange(_))
        ));
        assert_eq!(HistoryRange::default().to_string(), "6mo");
    }

    #[test]
    fn test_range_start() {
        let end = DateTime::parse_from_rfc3339("2026-10-17T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(HistoryRange::SixMonths.start(end), end - Duration::days(180));
        assert_eq!(
            HistoryRange::YearToDate.start(end).to_rfc3339(),
            "2026-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_profile_display_name() {
        let mut profile = CompanyProfile::bare("AAPL");
        assert_eq!(profile.display_name(), "AAPL");
        profile.name = Some("Apple Inc.".to_string());
        assert_eq!(profile.display_name(), "Apple Inc.");
    }
}
