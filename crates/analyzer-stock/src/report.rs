//! Plain-text report rendering

use std::error::Error as _;
use std::fmt::Write as _;

use crate::engine::CompanyAnalysis;
use crate::error::StockError;

const NOT_AVAILABLE: &str = "N/A";

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.2}"))
}

/// Render a completed analysis as a multi-section text report
pub fn render_report(result: &CompanyAnalysis) -> String {
    let profile = &result.profile;
    let snapshot = &result.analysis.snapshot;
    let score = &result.analysis.score;

    let mut out = String::new();

    let _ = writeln!(out, "📊 {} ({})", profile.display_name(), profile.symbol);
    let _ = writeln!(out, "Price: ${:.2}", snapshot.latest_price);
    let market_cap = profile
        .market_cap
        .map_or_else(|| NOT_AVAILABLE.to_string(), |cap| format!("{cap:.0}"));
    let _ = writeln!(out, "Market Cap: {market_cap}");
    out.push('\n');

    out.push_str("📈 Technicals\n");
    let _ = writeln!(out, "SMA20: {}", fmt_opt(snapshot.sma));
    let _ = writeln!(out, "RSI: {}", fmt_opt(snapshot.rsi));
    let _ = writeln!(out, "Support: {}", fmt_opt(snapshot.support));
    let _ = writeln!(out, "Resistance: {}", fmt_opt(snapshot.resistance));
    out.push('\n');

    out.push_str("📉 Trend Analysis\n");
    let _ = writeln!(out, "Trend: {} ({}/100)", score.trend_label, score.trend_score);
    let _ = writeln!(out, "Risk Score: {}/100", score.risk_score);
    out.push('\n');

    out.push_str("🧠 Investment Thesis\n");
    let _ = writeln!(out, "{}", result.analysis.thesis);
    out.push('\n');

    out.push_str("📰 News\n");
    for headline in result.headlines.iter() {
        let _ = writeln!(out, "- {}", headline.title);
    }
    let _ = write!(out, "\nSentiment Score: {}", result.analysis.sentiment);

    out
}

/// Render a failed request, including the underlying cause when there is one
pub fn render_error(symbol: &str, error: &StockError) -> String {
    let mut message = format!("❌ Error analyzing {symbol}: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(message, "\n   caused by: {cause}");
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ChartData;
    use crate::provider::CompanyProfile;
    use analyzer_core::{
        AnalysisError, Headline, HeadlineSet, IndicatorSnapshot, PriceSeries, SentimentValue,
        evaluate,
    };
    use chrono::Utc;

    fn sample(snapshot: IndicatorSnapshot, headlines: HeadlineSet, sentiment: f64) -> CompanyAnalysis {
        let analysis = evaluate(snapshot, SentimentValue::new(sentiment));
        let series = PriceSeries::from_closes(&[snapshot.latest_price]);
        CompanyAnalysis {
            profile: CompanyProfile {
                symbol: "AAPL".to_string(),
                name: Some("Apple Inc.".to_string()),
                market_cap: Some(3_100_000_000_000.0),
                current_price: Some(110.0),
            },
            chart: ChartData::new(&series, 20, &analysis).unwrap(),
            analysis,
            headlines,
            analyzed_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_full_report() {
        let snapshot = IndicatorSnapshot {
            latest_price: 110.0,
            sma: Some(100.0),
            rsi: Some(72.0),
            support: Some(95.5),
            resistance: Some(112.25),
        };
        let headlines = HeadlineSet::capped(
            [
                Headline::new("Apple beats estimates"),
                Headline::new("iPhone demand strong"),
            ],
            6,
        );
        let report = render_report(&sample(snapshot, headlines, 0.4));

        let expected = "\
📊 Apple Inc. (AAPL)
Price: $110.00
Market Cap: 3100000000000

📈 Technicals
SMA20: 100.00
RSI: 72.00
Support: 95.50
Resistance: 112.25

📉 Trend Analysis
Trend: Bullish (80/100)
Risk Score: 80/100

🧠 Investment Thesis
Positive momentum with supportive sentiment. Favorable risk-reward.

📰 News
- Apple beats estimates
- iPhone demand strong

Sentiment Score: 0.4";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_undefined_indicators() {
        let snapshot = IndicatorSnapshot {
            latest_price: 12.0,
            sma: None,
            rsi: None,
            support: None,
            resistance: None,
        };
        let mut result = sample(snapshot, HeadlineSet::empty(), 0.0);
        result.profile.market_cap = None;
        let report = render_report(&result);

        assert!(report.contains("Market Cap: N/A"));
        assert!(report.contains("SMA20: N/A"));
        assert!(report.contains("RSI: N/A"));
        assert!(report.contains("Trend: Bearish (0/100)"));
        assert!(report.contains("Mixed signals. Market awaiting confirmation."));
        assert!(report.ends_with("📰 News\n\nSentiment Score: 0"));
    }

    #[test]
    fn test_render_error_with_cause() {
        let cause = StockError::YahooFinanceError("No data found".to_string());
        let err: StockError = AnalysisError::data_unavailable("ZZZZ", cause).into();

        let message = render_error("ZZZZ", &err);
        assert_eq!(
            message,
            "❌ Error analyzing ZZZZ: Data not available for ZZZZ\n   caused by: Yahoo Finance error: No data found"
        );
    }
}
