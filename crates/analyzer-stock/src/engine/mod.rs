//! Analysis engine
//!
//! Fetches provider data, runs the indicator and scoring pipeline and packs
//! the result for rendering.

pub mod analysis_engine;
pub mod result;

pub use analysis_engine::AnalysisEngine;
pub use result::{ChartData, CompanyAnalysis};
