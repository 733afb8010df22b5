//! API clients for market data and headlines

pub mod news;
pub mod yahoo;

pub use news::{YahooNewsClient, YahooNewsItem};
pub use yahoo::YahooFinanceClient;
