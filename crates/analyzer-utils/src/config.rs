//! Typed access to environment variables

use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading settings from the environment
#[derive(Debug, Error)]
pub enum UtilsError {
    /// A variable is set but does not parse
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidEnv {
        key: String,
        value: String,
        reason: String,
    },
}

/// Read a non-empty string variable
pub fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read and parse a variable; unset or blank yields `Ok(None)`
pub fn env_parse<T>(key: &str) -> Result<Option<T>, UtilsError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, env_string(key))
}

fn parse_value<T>(key: &str, raw: Option<String>) -> Result<Option<T>, UtilsError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map(|value| {
        value.parse::<T>().map_err(|e| UtilsError::InvalidEnv {
            key: key.to_string(),
            reason: e.to_string(),
            value,
        })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        let parsed: Option<u64> = parse_value("N", Some("42".to_string())).unwrap();
        assert_eq!(parsed, Some(42));

        let missing: Option<u64> = parse_value("N", None).unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_parse_value_error() {
        let err = parse_value::<u64>("ANALYZER_MAX_HEADLINES", Some("six".to_string()))
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid value for ANALYZER_MAX_HEADLINES: \"six\""));
    }

    #[test]
    fn test_unset_variable() {
        assert_eq!(env_string("ANALYZER_UTILS_TEST_SURELY_UNSET"), None);
        let parsed: Option<u32> = env_parse("ANALYZER_UTILS_TEST_SURELY_UNSET").unwrap();
        assert_eq!(parsed, None);
    }
}
