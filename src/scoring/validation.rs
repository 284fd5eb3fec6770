use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let weights = [
        ("total_diff_weight", config.total_diff_weight),
        ("avg_diff_weight", config.avg_diff_weight),
        ("top_diff_weight", config.top_diff_weight),
        ("elite_count_diff_weight", config.elite_count_diff_weight),
        ("elite_stack_weight", config.elite_stack_weight),
    ];
    for (field, value) in weights {
        if let Some(w) = value {
            if !w.is_finite() || w < 0.0 {
                errors.push(format!(
                    "scoring.{}: must be a non-negative number, got {}",
                    field, w
                ));
            }
        }
    }

    if let Some(threshold) = config.elite_threshold {
        if !threshold.is_finite() {
            errors.push(format!(
                "scoring.elite_threshold: must be finite, got {}",
                threshold
            ));
        }
    }

    if config.top_k == Some(0) {
        errors.push("scoring.top_k: must be at least 1".to_string());
    }

    if config.stack_threshold == Some(0) {
        errors.push("scoring.stack_threshold: must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
