//! Headline sentiment aggregation

use crate::types::{HeadlineSet, SentimentValue};

/// Scores free text with a polarity in [-1, 1]
///
/// Implementations must be pure: the same text always scores the same.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Mean polarity of the headlines, rounded to 3 decimal places
///
/// An empty set is exactly neutral.
pub fn sentiment_score(headlines: &HeadlineSet, scorer: &dyn PolarityScorer) -> SentimentValue {
    if headlines.is_empty() {
        return SentimentValue::NEUTRAL;
    }

    let total: f64 = headlines
        .iter()
        .map(|h| {
            let p = scorer.polarity(&h.title);
            if p.is_nan() { 0.0 } else { p.clamp(-1.0, 1.0) }
        })
        .sum();
    let mean = total / headlines.len() as f64;

    SentimentValue::new(round_to(mean, 3))
}

// Rounds the exact binary value, ties to even: 0.3005 is stored just
// below the tie and gives 0.3.
fn round_to(value: f64, decimals: usize) -> f64 {
    let rounded = format!("{value:.decimals$}").parse().unwrap_or(value);
    // fold -0.0 into 0.0
    rounded + 0.0
}
