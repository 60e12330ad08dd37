use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AssessmentError, Result};

use super::{FundamentalMetrics, MetricsProvider};

/// Fetches fundamentals from the Yahoo Finance quoteSummary endpoint.
///
/// Two modules cover the whole checklist: `financialData` carries the
/// profitability, growth, leverage and cash flow figures; forward P/E only
/// appears under `defaultKeyStatistics`. ROCE is not exposed by the
/// endpoint at all, so it always comes back absent.
pub struct YahooFinanceProvider {
    base_url: String,
    client: reqwest::Client,
}

const QUOTE_SUMMARY_MODULES: &str = "financialData,defaultKeyStatistics";

impl YahooFinanceProvider {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: config.provider_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl MetricsProvider for YahooFinanceProvider {
    async fn fetch_metrics(&self, ticker: &str) -> Result<FundamentalMetrics> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}",
            self.base_url, ticker, QUOTE_SUMMARY_MODULES
        );

        info!("Fetching fundamentals for {} from Yahoo Finance", ticker);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AssessmentError::UnknownTicker(ticker.to_string()));
        }
        if !status.is_success() {
            return Err(AssessmentError::provider_error(format!(
                "Yahoo Finance returned HTTP {} for {}",
                status, ticker
            )));
        }

        parse_quote_summary(ticker, &body)
    }
}

/// Maps a raw quoteSummary body onto the metrics record. Split out from the
/// HTTP call so it can be exercised against canned payloads.
pub fn parse_quote_summary(ticker: &str, body: &str) -> Result<FundamentalMetrics> {
    let envelope: QuoteSummaryEnvelope = serde_json::from_str(body)?;
    let summary = envelope.quote_summary;

    if let Some(err) = summary.error {
        debug!("quoteSummary error for {}: {}", ticker, err.description);
        return Err(AssessmentError::UnknownTicker(ticker.to_string()));
    }

    let result = summary
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| AssessmentError::UnknownTicker(ticker.to_string()))?;

    let financial = result.financial_data.unwrap_or_default();
    let statistics = result.default_key_statistics.unwrap_or_default();

    Ok(FundamentalMetrics {
        roe: financial.return_on_equity.raw(),
        // quoteSummary has no ROCE field; reported as unavailable.
        roce: None,
        net_margin: financial.profit_margins.raw(),
        revenue_growth: financial.revenue_growth.raw(),
        earnings_growth: financial.earnings_growth.raw(),
        debt_to_equity: financial.debt_to_equity.raw(),
        free_cash_flow: financial.free_cashflow.raw(),
        forward_pe: statistics.forward_pe.raw(),
    })
}

// --- quoteSummary wire format ---

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
struct QuoteSummary {
    result: Option<Vec<QuoteSummaryResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    #[serde(rename = "financialData")]
    financial_data: Option<FinancialData>,
    #[serde(rename = "defaultKeyStatistics")]
    default_key_statistics: Option<DefaultKeyStatistics>,
}

#[derive(Debug, Default, Deserialize)]
struct FinancialData {
    #[serde(rename = "returnOnEquity", default)]
    return_on_equity: RawValue,
    #[serde(rename = "profitMargins", default)]
    profit_margins: RawValue,
    #[serde(rename = "revenueGrowth", default)]
    revenue_growth: RawValue,
    #[serde(rename = "earningsGrowth", default)]
    earnings_growth: RawValue,
    #[serde(rename = "debtToEquity", default)]
    debt_to_equity: RawValue,
    #[serde(rename = "freeCashflow", default)]
    free_cashflow: RawValue,
}

#[derive(Debug, Default, Deserialize)]
struct DefaultKeyStatistics {
    #[serde(rename = "forwardPE", default)]
    forward_pe: RawValue,
}

/// Yahoo wraps every numeric as `{ "raw": 1.23, "fmt": "1.23" }` and
/// sometimes sends an empty object `{}` when the figure is unknown.
#[derive(Debug, Default, Deserialize)]
struct RawValue {
    raw: Option<f64>,
}

impl RawValue {
    fn raw(&self) -> Option<f64> {
        self.raw
    }
}
