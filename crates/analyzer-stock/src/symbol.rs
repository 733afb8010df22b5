//! Ticker symbol normalisation

use crate::error::{Result, StockError};

const MAX_SYMBOL_LEN: usize = 15;

/// Trim and uppercase a ticker, rejecting empty or malformed input
///
/// Accepts letters, digits and `.`, `-`, `^`, `=` (e.g. `BRK-B`, `^GSPC`,
/// `EURUSD=X`, `SAP.DE`).
pub fn normalize_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_uppercase();

    if symbol.is_empty() {
        return Err(StockError::InvalidSymbol("symbol is empty".to_string()));
    }
    if symbol.len() > MAX_SYMBOL_LEN {
        return Err(StockError::InvalidSymbol(format!(
            "{symbol} is longer than {MAX_SYMBOL_LEN} characters"
        )));
    }
    if let Some(bad) = symbol
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
    {
        return Err(StockError::InvalidSymbol(format!(
            "{symbol} contains unsupported character {bad:?}"
        )));
    }

    Ok(symbol)
}
