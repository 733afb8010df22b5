//! Indicator and scoring pipeline for company analysis
//!
//! Four pure stages that compose linearly:
//!
//! - [`indicators`]: SMA, RSI and rolling support/resistance from a price series
//! - [`sentiment`]: mean headline polarity
//! - [`scoring`]: fixed-threshold trend and risk scores
//! - [`thesis`]: one of three canned narratives
//!
//! No stage holds state, so a single [`pipeline::analyze`] call can run
//! concurrently from any number of callers.
//!
//! # Example
//!
//! ```rust
//! use analyzer_core::{HeadlineSet, Headline, LexiconScorer, PriceSeries, analyze};
//!
//! let closes: Vec<f64> = (1..=40).map(f64::from).collect();
//! let series = PriceSeries::from_closes(&closes);
//! let headlines = HeadlineSet::capped([Headline::new("Shares rally on strong demand")], 6);
//!
//! let analysis = analyze(&series, &headlines, &LexiconScorer::new()).unwrap();
//! assert_eq!(analysis.score.trend_score, 80);
//! ```

pub mod error;
pub mod indicators;
pub mod lexicon;
pub mod pipeline;
pub mod scoring;
pub mod sentiment;
pub mod thesis;
pub mod types;

pub use error::{AnalysisError, BoxedSource, Result};
pub use indicators::{IndicatorParams, IndicatorSnapshot, RSI_ZERO_LOSS};
pub use lexicon::LexiconScorer;
pub use pipeline::{Analysis, analyze, evaluate};
pub use sentiment::{PolarityScorer, sentiment_score};
pub use thesis::Thesis;
pub use types::{
    DEFAULT_HEADLINE_CAP, Headline, HeadlineSet, PricePoint, PriceSeries, ScoreResult,
    SentimentValue, TrendLabel,
};
