//! Error types for data fetching and analysis requests

use analyzer_core::AnalysisError;
use analyzer_utils::UtilsError;
use thiserror::Error;

/// Errors raised by providers, configuration and the analysis engine
#[derive(Debug, Error)]
pub enum StockError {
    /// API request failed
    #[error("API error: {0}")]
    ApiError(String),

    /// Invalid stock symbol provided
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Unknown history range
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Provider answered but had no data for the symbol
    #[error("Data not available for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Yahoo Finance API error
    #[error("Yahoo Finance error: {0}")]
    YahooFinanceError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Result type alias for stock operations
pub type Result<T> = std::result::Result<T, StockError>;

impl From<UtilsError> for StockError {
    fn from(err: UtilsError) -> Self {
        StockError::ConfigError(err.to_string())
    }
}

impl StockError {
    /// True when the request failed because market data could not be obtained
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            StockError::DataUnavailable { .. }
                | StockError::Analysis(AnalysisError::DataUnavailable { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = StockError::InvalidSymbol("IN VALID".to_string());
        assert_eq!(err.to_string(), "Invalid symbol: IN VALID");

        let err = StockError::DataUnavailable {
            symbol: "AAPL".to_string(),
            reason: "No data found".to_string(),
        };
        assert_eq!(err.to_string(), "Data not available for AAPL: No data found");
    }

    #[test]
    fn test_analysis_error_is_transparent() {
        let cause = StockError::YahooFinanceError("No data found, symbol may be delisted".into());
        let err: StockError = AnalysisError::data_unavailable("ZZZZ", cause).into();

        assert_eq!(err.to_string(), "Data not available for ZZZZ");
        assert!(err.is_data_unavailable());
        let source = err.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Yahoo Finance error: No data found, symbol may be delisted")
        );
    }

    #[test]
    fn test_utils_error_conversion() {
        let err: StockError = UtilsError::InvalidEnv {
            key: "K".into(),
            value: "v".into(),
            reason: "bad".into(),
        }
        .into();
        assert!(matches!(err, StockError::ConfigError(_)));
    }
}
