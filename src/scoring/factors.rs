use super::config::Weights;

/// Raw fairness factors of one candidate split, before weighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitMetrics {
    pub total_diff: f64,
    pub avg_diff: f64,
    pub top_diff: f64,
    pub elite_count_diff: usize,
    pub elite_stack_penalty: usize,
}

impl SplitMetrics {
    /// Measure a split given the skills of each team
    pub fn measure(skills_a: &[f64], skills_b: &[f64], weights: &Weights) -> Self {
        let total_a: f64 = skills_a.iter().sum();
        let total_b: f64 = skills_b.iter().sum();

        let elite_a = elite_count(skills_a, weights.elite_threshold);
        let elite_b = elite_count(skills_b, weights.elite_threshold);

        Self {
            total_diff: (total_a - total_b).abs(),
            avg_diff: (mean(total_a, skills_a.len()) - mean(total_b, skills_b.len())).abs(),
            top_diff: (top_k_sum(skills_a, weights.top_k) - top_k_sum(skills_b, weights.top_k))
                .abs(),
            elite_count_diff: elite_a.abs_diff(elite_b),
            elite_stack_penalty: stack_penalty(elite_a, weights.stack_threshold)
                + stack_penalty(elite_b, weights.stack_threshold),
        }
    }
}

fn mean(total: f64, len: usize) -> f64 {
    if len == 0 {
        0.0
    } else {
        total / len as f64
    }
}

/// Sum of the `k` highest skills (all of them if fewer than `k`)
pub fn top_k_sum(skills: &[f64], k: usize) -> f64 {
    let mut sorted = skills.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted.iter().take(k).sum()
}

/// Number of skills at or above the elite threshold
pub fn elite_count(skills: &[f64], threshold: f64) -> usize {
    skills.iter().filter(|&&s| s >= threshold).count()
}

/// Penalty for one team: 2 per elite beyond `threshold - 1`, once `threshold` is reached
pub fn stack_penalty(elites: usize, threshold: usize) -> usize {
    if threshold > 0 && elites >= threshold {
        (elites - (threshold - 1)) * 2
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_sum() {
        assert_eq!(top_k_sum(&[50.0, 90.0, 70.0, 80.0, 60.0], 4), 300.0);
        assert_eq!(top_k_sum(&[50.0, 90.0], 4), 140.0);
        assert_eq!(top_k_sum(&[], 4), 0.0);
    }

    #[test]
    fn test_elite_count_inclusive() {
        assert_eq!(elite_count(&[85.0, 84.9, 95.0, 40.0], 85.0), 2);
    }

    #[test]
    fn test_stack_penalty_default_threshold() {
        assert_eq!(stack_penalty(0, 3), 0);
        assert_eq!(stack_penalty(2, 3), 0);
        assert_eq!(stack_penalty(3, 3), 2);
        assert_eq!(stack_penalty(4, 3), 4);
        assert_eq!(stack_penalty(5, 3), 6);
    }

    #[test]
    fn test_stack_penalty_zero_threshold_disabled() {
        assert_eq!(stack_penalty(5, 0), 0);
    }

    #[test]
    fn test_measure_balanced_elite_split() {
        // 95,85,80,70 vs 85,85,85,75
        let a = [95.0, 85.0, 80.0, 70.0];
        let b = [85.0, 85.0, 85.0, 75.0];
        let m = SplitMetrics::measure(&a, &b, &Weights::default());
        assert_eq!(m.total_diff, 0.0);
        assert_eq!(m.avg_diff, 0.0);
        assert_eq!(m.top_diff, 0.0);
        assert_eq!(m.elite_count_diff, 1);
        assert_eq!(m.elite_stack_penalty, 2);
    }

    #[test]
    fn test_measure_uneven_sizes() {
        let a = [60.0, 60.0, 30.0];
        let b = [80.0, 70.0];
        let m = SplitMetrics::measure(&a, &b, &Weights::default());
        assert_eq!(m.total_diff, 0.0);
        assert_eq!(m.avg_diff, 25.0);
        assert_eq!(m.top_diff, 0.0);
        assert_eq!(m.elite_count_diff, 0);
    }

    #[test]
    fn test_measure_is_symmetric() {
        let a = [95.0, 40.0, 60.0];
        let b = [85.0, 85.0, 70.0];
        let w = Weights::default();
        assert_eq!(SplitMetrics::measure(&a, &b, &w), SplitMetrics::measure(&b, &a, &w));
    }
}
