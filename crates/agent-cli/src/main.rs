//! Command-line interface for agent-rs
//!
//! Renders a JSON bundle of analyst sections into a standalone HTML report.
//!
//! # Usage
//!
//! ```bash
//! # Optional translation backend
//! export OPENAI_API_KEY="sk-..."
//! export TRADINGAGENTS_LANG="zh_TW"
//!
//! agent-report --input bundle.json --ticker NVDA --date 2025-06-02 --output index.html
//! ```

use agent_report::{
    Language, ReportBundle, ReportConfig, ReportGenerator, ReportRequest, parse_date,
};
use anyhow::Context;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "agent-report")]
#[command(about = "Render analyst report sections into a standalone HTML report", long_about = None)]
struct Args {
    /// JSON object mapping section keys (market_report, news_report, ...) to text
    #[arg(short, long)]
    input: PathBuf,

    /// Ticker symbol shown in the report header
    #[arg(short, long, default_value = "SPY")]
    ticker: String,

    /// Analysis date (YYYY-MM-DD), defaults to the previous trading day
    #[arg(short, long, value_parser = parse_date_arg)]
    date: Option<NaiveDate>,

    /// Output HTML file
    #[arg(short, long, default_value = "index.html")]
    output: PathBuf,

    /// Report language (zh_TW, zh_CN, en_US), overrides TRADINGAGENTS_LANG
    #[arg(short, long, value_parser = parse_language_arg)]
    lang: Option<Language>,

    /// Do not translate sections even if a backend is configured
    #[arg(long)]
    no_translate: bool,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

fn parse_language_arg(value: &str) -> Result<Language, String> {
    value.parse::<Language>().map_err(|e| e.to_string())
}

/// Most recent weekday before `today`
fn previous_trading_day(today: NaiveDate) -> NaiveDate {
    let back = match today.weekday() {
        Weekday::Mon => 3,
        Weekday::Sun => 2,
        _ => 1,
    };
    today - Days::new(back)
}

fn build_config(args: &Args) -> anyhow::Result<ReportConfig> {
    let mut config = ReportConfig::from_env();
    if let Some(lang) = args.lang {
        config.language = lang;
    }
    if args.no_translate {
        config.translation = None;
    }
    config.validate().context("Invalid report configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agent_utils::init_tracing_with_default("warn,agent_report=info,agent_cli=info");

    let args = Args::parse();
    let config = build_config(&args)?;

    let json = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let bundle = ReportBundle::from_json(&json)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    if bundle.is_empty() {
        warn!("{} contains no report sections", args.input.display());
    }

    let date = args
        .date
        .unwrap_or_else(|| previous_trading_day(Local::now().date_naive()));
    let request = ReportRequest::new(&args.ticker, date, bundle)?;

    info!(
        "Generating {} report for {} on {}",
        config.language,
        request.ticker(),
        request.analysis_date()
    );

    let generator = ReportGenerator::new(config).context("Failed to set up report generator")?;
    let path = generator
        .generate(&request, &args.output)
        .await
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_previous_trading_day() {
        // 2025-06-02 is a Monday
        assert_eq!(previous_trading_day(day(2025, 6, 2)), day(2025, 5, 30));
        assert_eq!(previous_trading_day(day(2025, 6, 1)), day(2025, 5, 30));
        assert_eq!(previous_trading_day(day(2025, 5, 31)), day(2025, 5, 30));
        assert_eq!(previous_trading_day(day(2025, 6, 4)), day(2025, 6, 3));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["agent-report", "--input", "bundle.json"]).unwrap();
        assert_eq!(args.ticker, "SPY");
        assert_eq!(args.output, PathBuf::from("index.html"));
        assert!(args.date.is_none());
        assert!(args.lang.is_none());
        assert!(!args.no_translate);
    }

    #[test]
    fn test_args_full() {
        let args = Args::try_parse_from([
            "agent-report",
            "-i",
            "b.json",
            "--ticker",
            "nvda",
            "--date",
            "2025-06-02",
            "--lang",
            "en_US",
            "--no-translate",
        ])
        .unwrap();
        assert_eq!(args.date, Some(day(2025, 6, 2)));
        assert_eq!(args.lang, Some(Language::English));
        assert!(args.no_translate);
    }

    #[test]
    fn test_args_reject_bad_values() {
        assert!(Args::try_parse_from(["agent-report", "-i", "b.json", "-d", "06/02/2025"]).is_err());
        assert!(Args::try_parse_from(["agent-report", "-i", "b.json", "-l", "fr_FR"]).is_err());
        assert!(Args::try_parse_from(["agent-report"]).is_err());
    }
}
