//! Shared utilities for company-analyzer
//!
//! Logging setup and helpers for reading typed settings from the environment.

pub mod config;
pub mod logging;

pub use config::{UtilsError, env_parse, env_string};
pub use logging::init_tracing;
