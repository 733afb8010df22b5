//! Command-line interface for company-analyzer

use analyzer_stock::{
    AnalysisEngine, AnalyzerConfig, CompanyAnalysis, HistoryRange, render_error, render_report,
};
use anyhow::Context as _;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

const DEFAULT_LOG_FILTER: &str = "warn,analyzer_stock=info";

#[derive(Parser, Debug)]
#[command(name = "company-analyzer")]
#[command(about = "Technical and sentiment snapshot for stock tickers", long_about = None)]
struct Args {
    /// Ticker symbols to analyze; starts an interactive prompt when omitted
    symbols: Vec<String>,

    /// Price history window (1mo, 3mo, 6mo, 1y, 2y, 5y, ytd)
    #[arg(short, long)]
    range: Option<HistoryRange>,

    /// Maximum number of headlines to score
    #[arg(long)]
    headlines: Option<usize>,

    /// Print the full analysis as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

impl Args {
    /// CLI flags first, then ANALYZER_* variables, then defaults
    fn config(&self) -> anyhow::Result<AnalyzerConfig> {
        let mut builder = AnalyzerConfig::builder();
        if let Some(range) = self.range {
            builder = builder.history_range(range);
        }
        if let Some(max) = self.headlines {
            builder = builder.max_headlines(max);
        }
        Ok(builder.with_env()?.build()?)
    }
}

fn render(result: &CompanyAnalysis, json: bool) -> anyhow::Result<String> {
    if json {
        serde_json::to_string_pretty(result).context("failed to serialize analysis")
    } else {
        Ok(render_report(result))
    }
}

/// Analyze one symbol and print the outcome; returns whether it succeeded
async fn run_symbol(engine: &AnalysisEngine, symbol: &str, json: bool) -> anyhow::Result<bool> {
    match engine.analyze(symbol).await {
        Ok(result) => {
            println!("{}\n", render(&result, json)?);
            Ok(true)
        }
        Err(e) => {
            eprintln!("{}\n", render_error(symbol.trim(), &e));
            Ok(false)
        }
    }
}

enum PromptInput<'a> {
    Skip,
    Quit,
    Symbol(&'a str),
}

fn classify(line: &str) -> PromptInput<'_> {
    let line = line.trim();
    if line.is_empty() {
        PromptInput::Skip
    } else if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        PromptInput::Quit
    } else {
        PromptInput::Symbol(line)
    }
}

async fn interactive(engine: &AnalysisEngine, json: bool) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"Enter stock symbol: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        match classify(&line) {
            PromptInput::Skip => {}
            PromptInput::Quit => break,
            PromptInput::Symbol(symbol) => {
                run_symbol(engine, symbol, json).await?;
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    analyzer_utils::init_tracing(DEFAULT_LOG_FILTER);

    let args = Args::parse();
    let config = Arc::new(args.config()?);
    info!(range = %config.history_range, headlines = config.max_headlines, "Starting company-analyzer");

    let engine = AnalysisEngine::with_yahoo(config)?;

    if args.symbols.is_empty() {
        interactive(&engine, args.json).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut failed = 0usize;
    for symbol in &args.symbols {
        if !run_symbol(&engine, symbol, args.json).await? {
            failed += 1;
        }
    }

    if failed > 0 {
        info!(failed, total = args.symbols.len(), "Some symbols could not be analyzed");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols_and_flags() {
        let args = Args::try_parse_from([
            "company-analyzer",
            "AAPL",
            "msft",
            "--range",
            "1y",
            "--headlines",
            "3",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.symbols, vec!["AAPL", "msft"]);
        assert_eq!(args.range, Some(HistoryRange::OneYear));
        assert_eq!(args.headlines, Some(3));
        assert!(args.json);
    }

    #[test]
    fn test_parse_no_symbols() {
        let args = Args::try_parse_from(["company-analyzer"]).unwrap();
        assert!(args.symbols.is_empty());
        assert_eq!(args.range, None);
        assert!(!args.json);
    }

    #[test]
    fn test_parse_rejects_unknown_range() {
        assert!(Args::try_parse_from(["company-analyzer", "--range", "10d"]).is_err());
    }

    #[test]
    fn test_config_rejects_headline_limit() {
        let args = Args::try_parse_from(["company-analyzer", "--headlines", "0"]).unwrap();
        assert!(args.config().is_err());
    }

    #[test]
    fn test_classify_prompt_input() {
        assert!(matches!(classify("   "), PromptInput::Skip));
        assert!(matches!(classify("quit"), PromptInput::Quit));
        assert!(matches!(classify(" EXIT "), PromptInput::Quit));
        assert!(matches!(classify(" aapl "), PromptInput::Symbol("aapl")));
    }
}
