//! Technical indicators over a closing-price series
//!
//! Every function works on closes ordered oldest first. Positions where a
//! window is not yet filled are `None`.
//!
//! RSI uses simple (not Wilder-smoothed) averages of gains and losses. When
//! the trailing average loss is zero the RSI is reported as `100.0`, which
//! also covers a perfectly flat window.

use serde::{Deserialize, Serialize};
use ta::Next;
use ta::indicators::{Maximum, Minimum, SimpleMovingAverage};

use crate::error::{AnalysisError, Result};
use crate::types::PriceSeries;

/// RSI reported when the trailing average loss is zero
pub const RSI_ZERO_LOSS: f64 = 100.0;

/// Fixed indicator windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub sma_window: usize,
    pub rsi_period: usize,
    pub level_window: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_window: 20,
            rsi_period: 14,
            level_window: 20,
        }
    }
}

fn check_window(window: usize, name: &str) -> Result<()> {
    if window == 0 {
        return Err(AnalysisError::ComputationUndefined(format!(
            "{name} must be greater than 0"
        )));
    }
    Ok(())
}

fn undefined(err: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::ComputationUndefined(err.to_string())
}

/// Feed every close through `indicator`, hiding outputs until `window` closes are in
fn rolling<I>(closes: &[f64], window: usize, mut indicator: I) -> Vec<Option<f64>>
where
    I: Next<f64, Output = f64>,
{
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let value = indicator.next(close);
            (i + 1 >= window).then_some(value)
        })
        .collect()
}

/// Simple moving average at every index
pub fn sma(closes: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    check_window(window, "SMA window")?;
    let indicator = SimpleMovingAverage::new(window).map_err(undefined)?;
    Ok(rolling(closes, window, indicator))
}

/// Relative Strength Index at every index
///
/// The first delta exists at index 1, so the earliest defined value is at
/// index `period`.
pub fn rsi(closes: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    check_window(period, "RSI period")?;

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    let values = (0..closes.len())
        .map(|i| {
            if i < period {
                return None;
            }
            let window = &deltas[i - period..i];
            let avg_gain = window.iter().map(|d| d.max(0.0)).sum::<f64>() / period as f64;
            let avg_loss = window.iter().map(|d| (-d).max(0.0)).sum::<f64>() / period as f64;
            Some(rsi_from_averages(avg_gain, avg_loss))
        })
        .collect();
    Ok(values)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return RSI_ZERO_LOSS;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// Rolling minimum and maximum over the trailing `window` at the latest index
///
/// Returns `(support, resistance)`, or `None` while the window is not filled.
pub fn support_resistance(closes: &[f64], window: usize) -> Result<Option<(f64, f64)>> {
    check_window(window, "support/resistance window")?;

    let support = Minimum::new(window).map_err(undefined)?;
    let resistance = Maximum::new(window).map_err(undefined)?;
    let support = rolling(closes, window, support).last().copied().flatten();
    let resistance = rolling(closes, window, resistance).last().copied().flatten();
    Ok(support.zip(resistance))
}

/// Indicator values at the most recent point of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub latest_price: f64,
    pub sma: Option<f64>,
    pub rsi: Option<f64>,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
}

impl IndicatorSnapshot {
    /// Compute the snapshot for `series`
    ///
    /// Short histories leave the affected fields undefined; only an empty
    /// series or a non-finite close is an error.
    pub fn compute(series: &PriceSeries, params: &IndicatorParams) -> Result<Self> {
        let closes = series.closes();
        let Some(&latest_price) = closes.last() else {
            return Err(AnalysisError::InsufficientHistory {
                required: 1,
                available: 0,
            });
        };
        if let Some(bad) = closes.iter().find(|c| !c.is_finite()) {
            return Err(AnalysisError::ComputationUndefined(format!(
                "non-finite close price {bad}"
            )));
        }

        let sma = sma(&closes, params.sma_window)?.last().copied().flatten();
        let rsi = rsi(&closes, params.rsi_period)?.last().copied().flatten();
        let levels = support_resistance(&closes, params.level_window)?;

        Ok(Self {
            latest_price,
            sma,
            rsi,
            support: levels.map(|(s, _)| s),
            resistance: levels.map(|(_, r)| r),
        })
    }

    pub fn require_sma(&self, params: &IndicatorParams, available: usize) -> Result<f64> {
        self.sma.ok_or(AnalysisError::InsufficientHistory {
            required: params.sma_window,
            available,
        })
    }

    pub fn require_rsi(&self, params: &IndicatorParams, available: usize) -> Result<f64> {
        self.rsi.ok_or(AnalysisError::InsufficientHistory {
            required: params.rsi_period + 1,
            available,
        })
    }

    pub fn require_levels(&self, params: &IndicatorParams, available: usize) -> Result<(f64, f64)> {
        self.support
            .zip(self.resistance)
            .ok_or(AnalysisError::InsufficientHistory {
                required: params.level_window,
                available,
            })
    }
}

/// Full SMA series aligned with `series`, for charting
pub fn sma_series(series: &PriceSeries, window: usize) -> Result<Vec<Option<f64>>> {
    sma(&series.closes(), window)
}
