//! Analysis result types

use analyzer_core::{Analysis, HeadlineSet, PriceSeries, Result, indicators};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::provider::CompanyProfile;

/// Series needed to draw the price chart: closes, SMA line and the two levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub timestamps: Vec<DateTime<Utc>>,
    pub closes: Vec<f64>,
    pub sma: Vec<Option<f64>>,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
}

impl ChartData {
    pub fn new(series: &PriceSeries, sma_window: usize, analysis: &Analysis) -> Result<Self> {
        Ok(Self {
            timestamps: series.points().iter().map(|p| p.timestamp).collect(),
            closes: series.closes(),
            sma: indicators::sma_series(series, sma_window)?,
            support: analysis.snapshot.support,
            resistance: analysis.snapshot.resistance,
        })
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

/// Complete result of analyzing one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAnalysis {
    pub profile: CompanyProfile,
    pub analysis: Analysis,
    pub headlines: HeadlineSet,
    pub chart: ChartData,
    pub analyzed_at: DateTime<Utc>,
}

impl CompanyAnalysis {
    pub fn symbol(&self) -> &str {
        &self.profile.symbol
    }

    /// One-line summary for logs and listings
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({}/100), risk {}/100",
            self.symbol(),
            self.analysis.score.trend_label,
            self.analysis.score.trend_score,
            self.analysis.score.risk_score
        )
    }
}
