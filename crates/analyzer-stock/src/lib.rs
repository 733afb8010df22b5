//! Company analysis over live market data
//!
//! This crate wires the pure pipeline from `analyzer-core` to real data:
//!
//! - Price history and company profile from Yahoo Finance
//! - Recent headlines from the Yahoo Finance search endpoint
//! - TTL caching of provider responses
//! - An [`AnalysisEngine`] that runs fetch, pipeline and chart extraction
//! - A plain-text report
//!
//! # Example
//!
//! ```rust,ignore
//! use analyzer_stock::{AnalysisEngine, AnalyzerConfig, render_report};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(AnalyzerConfig::from_env()?);
//!     let engine = AnalysisEngine::with_yahoo(config)?;
//!
//!     let result = engine.analyze("AAPL").await?;
//!     println!("{}", render_report(&result));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod provider;
pub mod report;
pub mod symbol;

pub use config::AnalyzerConfig;
pub use engine::{AnalysisEngine, ChartData, CompanyAnalysis};
pub use error::{Result, StockError};
pub use provider::{
    CompanyProfile, HeadlineProvider, HistoryRange, MarketData, MarketDataProvider,
};
pub use report::{render_error, render_report};
pub use symbol::normalize_symbol;
