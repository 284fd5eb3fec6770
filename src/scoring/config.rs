use serde::{Deserialize, Serialize};

pub const DEFAULT_TOTAL_DIFF_WEIGHT: f64 = 10_000.0;
pub const DEFAULT_AVG_DIFF_WEIGHT: f64 = 100.0;
pub const DEFAULT_TOP_DIFF_WEIGHT: f64 = 50.0;
pub const DEFAULT_ELITE_COUNT_DIFF_WEIGHT: f64 = 1_200.0;
pub const DEFAULT_ELITE_STACK_WEIGHT: f64 = 3_000.0;

/// Skill at or above which a participant counts as elite
pub const DEFAULT_ELITE_THRESHOLD: f64 = 85.0;

/// How many top players per team are compared
pub const DEFAULT_TOP_K: usize = 4;

/// Elite count on one team at which the stacking penalty kicks in
pub const DEFAULT_STACK_THRESHOLD: usize = 3;

/// Scoring policy as written in the config file.
///
/// Every field is optional; missing fields fall back to the default policy.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   total_diff_weight: 10000
///   elite_threshold: 80
///   top_k: 3
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight of the absolute difference of team skill totals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_diff_weight: Option<f64>,

    /// Weight of the absolute difference of team skill averages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_diff_weight: Option<f64>,

    /// Weight of the difference between each team's top-k skill sums
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_diff_weight: Option<f64>,

    /// Weight of the difference in elite counts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elite_count_diff_weight: Option<f64>,

    /// Weight of the elite stacking penalty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elite_stack_weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elite_threshold: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_threshold: Option<usize>,
}

impl ScoringConfig {
    /// Resolve into a concrete policy table
    pub fn weights(&self) -> Weights {
        let d = Weights::default();
        Weights {
            total_diff: self.total_diff_weight.unwrap_or(d.total_diff),
            avg_diff: self.avg_diff_weight.unwrap_or(d.avg_diff),
            top_diff: self.top_diff_weight.unwrap_or(d.top_diff),
            elite_count_diff: self.elite_count_diff_weight.unwrap_or(d.elite_count_diff),
            elite_stack: self.elite_stack_weight.unwrap_or(d.elite_stack),
            elite_threshold: self.elite_threshold.unwrap_or(d.elite_threshold),
            top_k: self.top_k.unwrap_or(d.top_k),
            stack_threshold: self.stack_threshold.unwrap_or(d.stack_threshold),
        }
    }
}

/// Resolved fairness policy used by the search.
///
/// The large gaps between weights make total-skill balance dominate, with the
/// elite terms strong enough to outrank small total or average gains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub total_diff: f64,
    pub avg_diff: f64,
    pub top_diff: f64,
    pub elite_count_diff: f64,
    pub elite_stack: f64,
    pub elite_threshold: f64,
    pub top_k: usize,
    pub stack_threshold: usize,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            total_diff: DEFAULT_TOTAL_DIFF_WEIGHT,
            avg_diff: DEFAULT_AVG_DIFF_WEIGHT,
            top_diff: DEFAULT_TOP_DIFF_WEIGHT,
            elite_count_diff: DEFAULT_ELITE_COUNT_DIFF_WEIGHT,
            elite_stack: DEFAULT_ELITE_STACK_WEIGHT,
            elite_threshold: DEFAULT_ELITE_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            stack_threshold: DEFAULT_STACK_THRESHOLD,
        }
    }
}
