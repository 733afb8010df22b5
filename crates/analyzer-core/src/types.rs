//! Value objects flowing through the pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Headline cap applied when the caller does not choose one
pub const DEFAULT_HEADLINE_CAP: usize = 6;

/// A timestamped closing price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// Closing prices ordered oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, sorting the points chronologically
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self { points }
    }

    /// Build a series from bare closes, spaced one day apart from the Unix epoch
    pub fn from_closes(closes: &[f64]) -> Self {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let ts = DateTime::from_timestamp(i as i64 * 86_400, 0).unwrap_or_default();
                PricePoint::new(ts, close)
            })
            .collect();
        Self { points }
    }

    /// Get the points, oldest first
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Get the closing prices, oldest first
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Most recent point, if any
    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A news headline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
}

impl Headline {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Headlines for one analysis, never more than the cap it was built with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineSet {
    headlines: Vec<Headline>,
}

impl HeadlineSet {
    /// Keep at most `cap` headlines, in the order given
    pub fn capped(headlines: impl IntoIterator<Item = Headline>, cap: usize) -> Self {
        Self {
            headlines: headlines.into_iter().take(cap).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Headline> {
        self.headlines.iter()
    }

    pub fn len(&self) -> usize {
        self.headlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }
}

impl FromIterator<Headline> for HeadlineSet {
    fn from_iter<I: IntoIterator<Item = Headline>>(iter: I) -> Self {
        Self::capped(iter, DEFAULT_HEADLINE_CAP)
    }
}

/// Mean headline polarity, within [-1, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentValue(f64);

impl SentimentValue {
    /// Sentiment of an empty headline set
    pub const NEUTRAL: Self = Self(0.0);

    /// Clamp `value` into [-1, 1]; NaN becomes neutral
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::NEUTRAL
        } else {
            Self(value.clamp(-1.0, 1.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

impl fmt::Display for SentimentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction label derived from the trend score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendLabel {
    Bullish,
    Neutral,
    Bearish,
}

impl TrendLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Neutral => "Neutral",
            Self::Bearish => "Bearish",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend label plus trend and risk scores, both within [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub trend_label: TrendLabel,
    pub trend_score: u8,
    pub risk_score: u8,
}
