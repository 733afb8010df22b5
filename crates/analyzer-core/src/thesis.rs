//! Canned investment theses

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{ScoreResult, SentimentValue, TrendLabel};

/// One of three fixed narratives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Thesis {
    PositiveMomentum,
    NegativeTrend,
    MixedSignals,
}

impl Thesis {
    /// Pick the thesis for a score and the sign of the sentiment.
    ///
    /// The risk score is informational only and does not take part.
    pub fn compose(score: &ScoreResult, sentiment: SentimentValue) -> Self {
        match score.trend_label {
            TrendLabel::Bullish if sentiment.is_positive() => Self::PositiveMomentum,
            TrendLabel::Bearish if sentiment.is_negative() => Self::NegativeTrend,
            _ => Self::MixedSignals,
        }
    }

    /// Narrative text shown in the report
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PositiveMomentum => {
                "Positive momentum with supportive sentiment. Favorable risk-reward."
            }
            Self::NegativeTrend => {
                "Negative trend reinforced by poor sentiment. Elevated downside risk."
            }
            Self::MixedSignals => "Mixed signals. Market awaiting confirmation.",
        }
    }
}

impl fmt::Display for Thesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARRATIVES: [&str; 3] = [
        "Positive momentum with supportive sentiment. Favorable risk-reward.",
        "Negative trend reinforced by poor sentiment. Elevated downside risk.",
        "Mixed signals. Market awaiting confirmation.",
    ];

    fn score(trend_label: TrendLabel, risk_score: u8) -> ScoreResult {
        ScoreResult {
            trend_label,
            trend_score: 50,
            risk_score,
        }
    }

    #[test]
    fn test_compose_table() {
        let pos = SentimentValue::new(0.2);
        let neg = SentimentValue::new(-0.2);
        let zero = SentimentValue::NEUTRAL;

        let cases = [
            (TrendLabel::Bullish, pos, Thesis::PositiveMomentum),
            (TrendLabel::Bullish, zero, Thesis::MixedSignals),
            (TrendLabel::Bullish, neg, Thesis::MixedSignals),
            (TrendLabel::Neutral, pos, Thesis::MixedSignals),
            (TrendLabel::Neutral, zero, Thesis::MixedSignals),
            (TrendLabel::Neutral, neg, Thesis::MixedSignals),
            (TrendLabel::Bearish, pos, Thesis::MixedSignals),
            (TrendLabel::Bearish, zero, Thesis::MixedSignals),
            (TrendLabel::Bearish, neg, Thesis::NegativeTrend),
        ];

        for (label, sentiment, expected) in cases {
            let thesis = Thesis::compose(&score(label, 50), sentiment);
            assert_eq!(thesis, expected, "{label} / {sentiment}");
            assert!(NARRATIVES.contains(&thesis.as_str()));
        }
    }

    #[test]
    fn test_risk_is_not_consulted() {
        let sentiment = SentimentValue::new(0.5);
        let low = Thesis::compose(&score(TrendLabel::Bullish, 0), sentiment);
        let high = Thesis::compose(&score(TrendLabel::Bullish, 100), sentiment);
        assert_eq!(low, high);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(
            Thesis::MixedSignals.to_string(),
            "Mixed signals. Market awaiting confirmation."
        );
    }
}
