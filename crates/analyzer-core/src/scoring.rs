//! Fixed-threshold trend and risk scoring
//!
//! An undefined SMA or RSI makes its comparison false, so the matching term
//! is simply not applied. The trend label is read from the clamped score.

use crate::indicators::IndicatorSnapshot;
use crate::types::{ScoreResult, SentimentValue, TrendLabel};

const BULLISH_AT: i32 = 60;
const NEUTRAL_AT: i32 = 40;

/// Trend label and clamped trend score
pub fn trend_score(price: f64, sma: Option<f64>, rsi: Option<f64>) -> (TrendLabel, u8) {
    let above = |threshold: f64| rsi.is_some_and(|r| r > threshold);
    let below = |threshold: f64| rsi.is_some_and(|r| r < threshold);

    let mut score: i32 = 0;
    if sma.is_some_and(|s| price > s) {
        score += 40;
    }
    if above(55.0) {
        score += 30;
    }
    if above(65.0) {
        score += 10;
    }
    if below(45.0) {
        score -= 20;
    }

    let clamped = score.clamp(0, 100);
    let label = if clamped >= BULLISH_AT {
        TrendLabel::Bullish
    } else if clamped >= NEUTRAL_AT {
        TrendLabel::Neutral
    } else {
        TrendLabel::Bearish
    };

    (label, clamped as u8)
}

/// Risk score, capped at 100
pub fn risk_score(rsi: Option<f64>, sentiment: SentimentValue) -> u8 {
    let mut risk: u32 = 50;
    if rsi.is_some_and(|r| r > 70.0 || r < 30.0) {
        risk += 20;
    }
    if sentiment.value().abs() > 0.3 {
        risk += 10;
    }
    risk.min(100) as u8
}

/// Score an indicator snapshot together with headline sentiment
pub fn score(snapshot: &IndicatorSnapshot, sentiment: SentimentValue) -> ScoreResult {
    let (trend_label, trend_score) = trend_score(snapshot.latest_price, snapshot.sma, snapshot.rsi);
    ScoreResult {
        trend_label,
        trend_score,
        risk_score: risk_score(snapshot.rsi, sentiment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_score_terms() {
        assert_eq!(trend_score(110.0, Some(100.0), Some(50.0)), (TrendLabel::Neutral, 40));
        assert_eq!(trend_score(110.0, Some(100.0), Some(60.0)), (TrendLabel::Bullish, 70));
        assert_eq!(trend_score(110.0, Some(100.0), Some(72.0)), (TrendLabel::Bullish, 80));
        assert_eq!(trend_score(90.0, Some(100.0), Some(60.0)), (TrendLabel::Bearish, 30));
        assert_eq!(trend_score(90.0, Some(100.0), Some(70.0)), (TrendLabel::Neutral, 40));
        assert_eq!(trend_score(110.0, Some(100.0), Some(40.0)), (TrendLabel::Bearish, 20));
    }

    #[test]
    fn test_trend_score_clamps_negative() {
        assert_eq!(trend_score(90.0, Some(100.0), Some(20.0)), (TrendLabel::Bearish, 0));
    }

    #[test]
    fn test_price_equal_to_sma_adds_nothing() {
        assert_eq!(trend_score(100.0, Some(100.0), Some(50.0)), (TrendLabel::Bearish, 0));
    }

    #[test]
    fn test_undefined_indicators_skip_terms() {
        assert_eq!(trend_score(110.0, None, None), (TrendLabel::Bearish, 0));
        assert_eq!(trend_score(110.0, Some(100.0), None), (TrendLabel::Neutral, 40));
        assert_eq!(risk_score(None, SentimentValue::NEUTRAL), 50);
    }

    #[test]
    fn test_risk_score_terms() {
        assert_eq!(risk_score(Some(50.0), SentimentValue::new(0.1)), 50);
        assert_eq!(risk_score(Some(71.0), SentimentValue::new(0.1)), 70);
        assert_eq!(risk_score(Some(29.0), SentimentValue::new(-0.31)), 80);
        assert_eq!(risk_score(Some(50.0), SentimentValue::new(-0.5)), 60);
        // boundaries are exclusive
        assert_eq!(risk_score(Some(70.0), SentimentValue::new(0.3)), 50);
        assert_eq!(risk_score(Some(30.0), SentimentValue::new(-0.3)), 50);
    }

    #[test]
    fn test_scores_always_within_bounds() {
        let prices = [0.0, 50.0, 100.0, 150.0, f64::MAX];
        let smas = [None, Some(0.0), Some(100.0), Some(f64::MAX)];
        let rsis = [None, Some(0.0), Some(29.9), Some(44.9), Some(55.1), Some(65.1), Some(70.1), Some(100.0)];
        let sentiments = [-1.0, -0.31, 0.0, 0.31, 1.0];

        for &price in &prices {
            for &sma in &smas {
                for &rsi in &rsis {
                    for &s in &sentiments {
                        let (label, trend) = trend_score(price, sma, rsi);
                        let risk = risk_score(rsi, SentimentValue::new(s));
                        assert!(trend <= 100);
                        assert!(risk <= 100);
                        let expected = match trend {
                            60..=100 => TrendLabel::Bullish,
                            40..=59 => TrendLabel::Neutral,
                            _ => TrendLabel::Bearish,
                        };
                        assert_eq!(label, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_score_from_snapshot() {
        let snapshot = IndicatorSnapshot {
            latest_price: 110.0,
            sma: Some(100.0),
            rsi: Some(72.0),
            support: Some(95.0),
            resistance: Some(115.0),
        };
        let result = score(&snapshot, SentimentValue::new(0.4));
        assert_eq!(
            result,
            ScoreResult {
                trend_label: TrendLabel::Bullish,
                trend_score: 80,
                risk_score: 80,
            }
        );
    }
}
