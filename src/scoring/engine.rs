use super::config::Weights;
use super::factors::SplitMetrics;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub label: &'static str, // e.g. "Total diff", "Elite stacking"
    pub raw: f64,            // Unweighted factor value
    pub weight: f64,
    pub contribution: f64, // raw * weight
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub metrics: SplitMetrics,
    pub breakdown: ScoreBreakdown,
}

impl Weights {
    /// Weighted score of a measured split; lower is fairer
    pub fn combine(&self, m: &SplitMetrics) -> f64 {
        m.total_diff * self.total_diff
            + m.avg_diff * self.avg_diff
            + m.top_diff * self.top_diff
            + m.elite_count_diff as f64 * self.elite_count_diff
            + m.elite_stack_penalty as f64 * self.elite_stack
    }
}

/// Score a split with a per-factor breakdown.
///
/// The search hot path uses `SplitMetrics::measure` + `Weights::combine`
/// directly; this is for reporting.
pub fn score_split(skills_a: &[f64], skills_b: &[f64], weights: &Weights) -> ScoreResult {
    let metrics = SplitMetrics::measure(skills_a, skills_b, weights);

    let rows = [
        ("Total diff", metrics.total_diff, weights.total_diff),
        ("Avg diff", metrics.avg_diff, weights.avg_diff),
        ("Top diff", metrics.top_diff, weights.top_diff),
        (
            "Elite count diff",
            metrics.elite_count_diff as f64,
            weights.elite_count_diff,
        ),
        (
            "Elite stacking",
            metrics.elite_stack_penalty as f64,
            weights.elite_stack,
        ),
    ];

    let factors = rows
        .iter()
        .map(|&(label, raw, weight)| FactorContribution {
            label,
            raw,
            weight,
            contribution: raw * weight,
        })
        .collect();

    ScoreResult {
        score: weights.combine(&metrics),
        metrics,
        breakdown: ScoreBreakdown { factors },
    }
}
