//! Price series and headlines in, scored analysis out

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicators::{IndicatorParams, IndicatorSnapshot};
use crate::scoring;
use crate::sentiment::{PolarityScorer, sentiment_score};
use crate::thesis::Thesis;
use crate::types::{HeadlineSet, PriceSeries, ScoreResult, SentimentValue};

/// Output of one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub snapshot: IndicatorSnapshot,
    pub sentiment: SentimentValue,
    pub score: ScoreResult,
    pub thesis: Thesis,
}

/// Run indicators, sentiment, scoring and thesis in order
pub fn analyze(
    series: &PriceSeries,
    headlines: &HeadlineSet,
    scorer: &dyn PolarityScorer,
) -> Result<Analysis> {
    let snapshot = IndicatorSnapshot::compute(series, &IndicatorParams::default())?;
    let sentiment = sentiment_score(headlines, scorer);
    Ok(evaluate(snapshot, sentiment))
}

/// Score an already computed snapshot and sentiment
pub fn evaluate(snapshot: IndicatorSnapshot, sentiment: SentimentValue) -> Analysis {
    let score = scoring::score(&snapshot, sentiment);
    let thesis = Thesis::compose(&score, sentiment);
    Analysis {
        snapshot,
        sentiment,
        score,
        thesis,
    }
}
