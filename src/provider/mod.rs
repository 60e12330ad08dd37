pub mod yahoo;

pub use yahoo::YahooFinanceProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The eight checklist metrics, in report display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Roe,
    Roce,
    NetMargin,
    RevenueGrowth,
    EarningsGrowth,
    DebtToEquity,
    FreeCashFlow,
    ForwardPe,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::Roe,
        Metric::Roce,
        Metric::NetMargin,
        Metric::RevenueGrowth,
        Metric::EarningsGrowth,
        Metric::DebtToEquity,
        Metric::FreeCashFlow,
        Metric::ForwardPe,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Roe => "ROE",
            Metric::Roce => "ROCE",
            Metric::NetMargin => "Net Margin",
            Metric::RevenueGrowth => "Revenue Growth",
            Metric::EarningsGrowth => "Earnings Growth",
            Metric::DebtToEquity => "Debt/Equity",
            Metric::FreeCashFlow => "Free Cash Flow",
            Metric::ForwardPe => "P/E",
        }
    }
}

/// Fundamental metrics for a single ticker, as returned by the provider.
///
/// Every field is optional: providers routinely omit metrics they have no
/// data for, and an absent metric must flow through as absent rather than
/// as a zero. Units are whatever the provider reports - ratios as
/// fractions, debt/equity on a percentage scale, free cash flow as a
/// currency amount.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundamentalMetrics {
    pub roe: Option<f64>,
    pub roce: Option<f64>,
    pub net_margin: Option<f64>,
    pub revenue_growth: Option<f64>,
    pub earnings_growth: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub free_cash_flow: Option<f64>,
    pub forward_pe: Option<f64>,
}

impl FundamentalMetrics {
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Roe => self.roe,
            Metric::Roce => self.roce,
            Metric::NetMargin => self.net_margin,
            Metric::RevenueGrowth => self.revenue_growth,
            Metric::EarningsGrowth => self.earnings_growth,
            Metric::DebtToEquity => self.debt_to_equity,
            Metric::FreeCashFlow => self.free_cash_flow,
            Metric::ForwardPe => self.forward_pe,
        }
    }
}

/// Source of fundamental metrics for a ticker symbol.
#[async_trait]
pub trait MetricsProvider {
    async fn fetch_metrics(&self, ticker: &str) -> Result<FundamentalMetrics>;
}
