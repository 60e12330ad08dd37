pub mod scorer;

pub use scorer::FundamentalScorer;

use crate::provider::{FundamentalMetrics, Metric};

/// Per-metric checklist scores, each 0 or 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricScores {
    pub roe: u8,
    pub roce: u8,
    pub net_margin: u8,
    pub revenue_growth: u8,
    pub earnings_growth: u8,
    pub debt_to_equity: u8,
    pub free_cash_flow: u8,
    pub forward_pe: u8,
}

impl MetricScores {
    /// Highest total the checklist can award.
    pub const MAX: u8 = Metric::ALL.len() as u8;

    pub fn score(&self, metric: Metric) -> u8 {
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

    pub fn total(&self) -> u8 {
        Metric::ALL.iter().map(|m| self.score(*m)).sum()
    }
}

/// Everything the report needs for one ticker: the raw metrics, their
/// scores, and the aggregate.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub ticker: String,
    pub metrics: FundamentalMetrics,
    pub scores: MetricScores,
}

impl Assessment {
    pub fn new(ticker: impl Into<String>, metrics: FundamentalMetrics) -> Self {
        let scores = FundamentalScorer::new().score(&metrics);
        Self {
            ticker: ticker.into(),
            metrics,
            scores,
        }
    }

    pub fn total_score(&self) -> u8 {
        self.scores.total()
    }

    pub fn max_score(&self) -> u8 {
        MetricScores::MAX
    }
}
