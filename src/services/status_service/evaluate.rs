use crate::error::{GateError, GateResult};
use crate::models::{
    AuditResult, Category, Outcome, ResultsPayload, ScoreViolation, ThresholdConfig,
};
use crate::models::lighthouse::ALL_SCORES_MISSING;

/// Decides whether the audited pages meet the configured minimum scores.
///
/// With no thresholds configured there is nothing meaningful to check, so
/// the gate fails with the producer's runtime error if there is one, or a
/// fixed explanation otherwise. A missing `data` collection is only an
/// error when at least one threshold is set.
pub fn evaluate(config: &ThresholdConfig, payload: &ResultsPayload) -> GateResult<Outcome> {
    if !config.any_set() {
        let message = payload
            .runtime_error
            .clone()
            .unwrap_or_else(|| ALL_SCORES_MISSING.to_string());
        return Ok(Outcome::Fail(vec![message]));
    }

    let results = payload.data.as_deref().ok_or_else(|| {
        GateError::MalformedResults("expected a `data` collection of audit results".to_string())
    })?;

    let messages: Vec<String> = find_violations(config, results)
        .iter()
        .map(ScoreViolation::to_string)
        .collect();

    if messages.is_empty() {
        Ok(Outcome::Pass)
    } else {
        Ok(Outcome::Fail(messages))
    }
}

/// Every score below its threshold, ordered by result then by category.
pub fn find_violations(config: &ThresholdConfig, results: &[AuditResult]) -> Vec<ScoreViolation> {
    let mut violations = Vec::new();

    for result in results {
        for category in Category::ALL {
            let (Some(threshold), Some(score)) =
                (config.get(category).value(), result.scores.get(category))
            else {
                continue;
            };

            if score < threshold {
                violations.push(ScoreViolation {
                    url: result.url.clone(),
                    category,
                    threshold,
                    score,
                });
            }
        }
    }

    violations
}
