//! Error taxonomy for the indicator and scoring pipeline

use thiserror::Error;

/// Boxed provider error carried by [`AnalysisError::DataUnavailable`]
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors produced while analyzing a symbol
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The symbol is unknown or the market-data provider failed.
    ///
    /// Fatal to the request; the provider error is kept as the source.
    #[error("Data not available for {symbol}")]
    DataUnavailable {
        symbol: String,
        #[source]
        source: BoxedSource,
    },

    /// Fewer data points than a window requires
    #[error("Insufficient history: {required} data points required, {available} available")]
    InsufficientHistory { required: usize, available: usize },

    /// A computation has no defined value for its inputs
    #[error("Computation undefined: {0}")]
    ComputationUndefined(String),
}

impl AnalysisError {
    /// Wrap a provider error for `symbol`
    pub fn data_unavailable(
        symbol: impl Into<String>,
        source: impl Into<BoxedSource>,
    ) -> Self {
        Self::DataUnavailable {
            symbol: symbol.into(),
            source: source.into(),
        }
    }
}
