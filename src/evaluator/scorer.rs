use tracing::debug;

use crate::provider::FundamentalMetrics;

use super::MetricScores;

/// Scores fundamentals against the fixed checklist thresholds.
///
/// Each rule is independent and strict: a metric earns its point only when
/// a value is present and clears the threshold. An absent metric scores 0,
/// and so does a metric whose value is exactly zero - historical behavior
/// that matters for the "less than" rules, where 0 would otherwise pass.
pub struct FundamentalScorer;

const MIN_ROE: f64 = 0.12;
const MIN_ROCE: f64 = 0.15;
const MIN_NET_MARGIN: f64 = 0.10;
const MIN_REVENUE_GROWTH: f64 = 0.05;
const MIN_EARNINGS_GROWTH: f64 = 0.05;
// Debt/equity arrives on a percentage scale, so the ceiling is 100, not 1.0.
const MAX_DEBT_TO_EQUITY: f64 = 100.0;
const MIN_FREE_CASH_FLOW: f64 = 0.0;
const MAX_FORWARD_PE: f64 = 25.0;

impl FundamentalScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, metrics: &FundamentalMetrics) -> MetricScores {
        debug!("Scoring fundamentals: {:?}", metrics);

        MetricScores {
            roe: above(metrics.roe, MIN_ROE),
            roce: above(metrics.roce, MIN_ROCE),
            net_margin: above(metrics.net_margin, MIN_NET_MARGIN),
            revenue_growth: above(metrics.revenue_growth, MIN_REVENUE_GROWTH),
            earnings_growth: above(metrics.earnings_growth, MIN_EARNINGS_GROWTH),
            debt_to_equity: below(metrics.debt_to_equity, MAX_DEBT_TO_EQUITY),
            free_cash_flow: above(metrics.free_cash_flow, MIN_FREE_CASH_FLOW),
            forward_pe: below(metrics.forward_pe, MAX_FORWARD_PE),
        }
    }
}

impl Default for FundamentalScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn above(value: Option<f64>, threshold: f64) -> u8 {
    match value {
        Some(v) if v != 0.0 && v > threshold => 1,
        _ => 0,
    }
}

fn below(value: Option<f64>, threshold: f64) -> u8 {
    match value {
        Some(v) if v != 0.0 && v < threshold => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::MetricScores;
    use crate::provider::Metric;

    fn scenario_a() -> FundamentalMetrics {
        FundamentalMetrics {
            roe: Some(0.20),
            roce: None,
            net_margin: Some(0.15),
            revenue_growth: Some(0.10),
            earnings_growth: Some(-0.02),
            debt_to_equity: Some(50.0),
            free_cash_flow: Some(1_000_000.0),
            forward_pe: Some(18.0),
        }
    }

    #[test]
    fn healthy_company_scores_six_of_eight() {
        let scores = FundamentalScorer::new().score(&scenario_a());
        assert_eq!(scores.roe, 1);
        assert_eq!(scores.roce, 0);
        assert_eq!(scores.net_margin, 1);
        assert_eq!(scores.revenue_growth, 1);
        assert_eq!(scores.earnings_growth, 0);
        assert_eq!(scores.debt_to_equity, 1);
        assert_eq!(scores.free_cash_flow, 1);
        assert_eq!(scores.forward_pe, 1);
        assert_eq!(scores.total(), 6);
        assert_eq!(MetricScores::MAX, 8);
    }

    #[test]
    fn all_absent_scores_zero() {
        let scores = FundamentalScorer::new().score(&FundamentalMetrics::default());
        for metric in Metric::ALL {
            assert_eq!(scores.score(metric), 0, "{} should be 0", metric.label());
        }
        assert_eq!(scores.total(), 0);
    }

    #[test]
    fn thresholds_are_strict_boundaries() {
        let metrics = FundamentalMetrics {
            debt_to_equity: Some(100.0),
            forward_pe: Some(25.0),
            ..Default::default()
        };
        let scores = FundamentalScorer::new().score(&metrics);
        assert_eq!(scores.debt_to_equity, 0);
        assert_eq!(scores.forward_pe, 0);

        let metrics = FundamentalMetrics {
            debt_to_equity: Some(99.999),
            forward_pe: Some(24.999),
            ..Default::default()
        };
        let scores = FundamentalScorer::new().score(&metrics);
        assert_eq!(scores.debt_to_equity, 1);
        assert_eq!(scores.forward_pe, 1);
    }

    #[test]
    fn zero_values_score_like_missing_values() {
        // A 0.0 debt/equity would satisfy "< 100", but zero-valued metrics
        // have always scored 0, same as absent ones.
        let metrics = FundamentalMetrics {
            debt_to_equity: Some(0.0),
            free_cash_flow: Some(0.0),
            revenue_growth: Some(0.0),
            ..Default::default()
        };
        let scores = FundamentalScorer::new().score(&metrics);
        assert_eq!(scores.debt_to_equity, 0);
        assert_eq!(scores.free_cash_flow, 0);
        assert_eq!(scores.revenue_growth, 0);
    }

    #[test]
    fn greater_than_rules_are_monotonic() {
        let scorer = FundamentalScorer::new();
        let mut last = 0;
        for roe in [-0.5, 0.0, 0.05, 0.12, 0.121, 0.5, 2.0] {
            let score = scorer
                .score(&FundamentalMetrics {
                    roe: Some(roe),
                    ..Default::default()
                })
                .roe;
            assert!(score >= last, "ROE score dropped at {}", roe);
            last = score;
        }
    }

    #[test]
    fn less_than_rules_are_monotonic_downward() {
        let scorer = FundamentalScorer::new();
        let mut last = 1;
        for pe in [1.0, 10.0, 24.999, 25.0, 25.001, 100.0] {
            let score = scorer
                .score(&FundamentalMetrics {
                    forward_pe: Some(pe),
                    ..Default::default()
                })
                .forward_pe;
            assert!(score <= last, "P/E score rose at {}", pe);
            last = score;
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let scorer = FundamentalScorer::new();
        let metrics = scenario_a();
        assert_eq!(scorer.score(&metrics), scorer.score(&metrics));
    }

    #[test]
    fn negative_free_cash_flow_scores_zero() {
        let metrics = FundamentalMetrics {
            free_cash_flow: Some(-250_000.0),
            ..Default::default()
        };
        assert_eq!(FundamentalScorer::new().score(&metrics).free_cash_flow, 0);
    }
}
