mod config;
mod error;
mod evaluator;
mod provider;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use evaluator::Assessment;
use provider::{MetricsProvider, YahooFinanceProvider};
use report::ReportPresenter;

/// Company Health Assessment Tool
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Company ticker symbol (e.g., AAPL, INFY.NS)
    ticker: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let cli = Cli::parse();

    run_assessment(&cli.ticker).await
}

/// Fetch -> score -> print, once. Any provider failure surfaces as an
/// error here; no partial report is ever printed.
async fn run_assessment(ticker: &str) -> Result<()> {
    let config = config::load_config()?;
    let provider = YahooFinanceProvider::new(&config)?;

    let metrics = provider
        .fetch_metrics(ticker)
        .await
        .with_context(|| format!("could not assess '{ticker}'"))?;

    let assessment = Assessment::new(ticker, metrics);
    info!(
        "{} scored {}/{}",
        ticker,
        assessment.total_score(),
        assessment.max_score()
    );

    ReportPresenter::new().print(&assessment);

    Ok(())
}
