use crate::error::{GateError, GateResult};
use crate::models::{Category, ResultsPayload, Threshold, ThresholdConfig};
use crate::utils::InputProvider;
use std::path::PathBuf;

pub const RESULTS_INPUT: &str = "lighthouseCheckResults";
pub const OUTPUT_DIRECTORY_INPUT: &str = "outputDirectory";

// Everything the evaluator needs, parsed from raw inputs
#[derive(Debug, Clone, PartialEq)]
pub struct GateInputs {
    pub config: ThresholdConfig,
    pub payload: ResultsPayload,
}

/// Turns raw string inputs into typed thresholds and a parsed results payload.
///
/// Empty values are treated the same as missing ones. Threshold values that
/// are present must parse as finite, non-negative numbers.
pub fn normalize(inputs: &impl InputProvider) -> GateResult<GateInputs> {
    let mut config = ThresholdConfig::default();

    for category in Category::ALL {
        let threshold = match non_empty(inputs, category.input_name()) {
            Some(raw) => Threshold::Value(parse_threshold(category, &raw)?),
            None => Threshold::Unset,
        };
        config.set(category, threshold);
    }

    config.output_directory = non_empty(inputs, OUTPUT_DIRECTORY_INPUT).map(PathBuf::from);

    let raw_results = non_empty(inputs, RESULTS_INPUT).ok_or_else(|| {
        GateError::MalformedResults(format!("input required and not supplied: {}", RESULTS_INPUT))
    })?;
    let payload = parse_results(&raw_results)?;

    Ok(GateInputs { config, payload })
}

pub fn parse_results(raw: &str) -> GateResult<ResultsPayload> {
    let payload: ResultsPayload =
        serde_json::from_str(raw).map_err(|e| GateError::MalformedResults(e.to_string()))?;

    if let Some(index) = payload.results().iter().position(|r| r.url.trim().is_empty()) {
        return Err(GateError::MalformedResults(format!(
            "result at index {} has an empty url",
            index
        )));
    }

    Ok(payload)
}

fn parse_threshold(category: Category, raw: &str) -> GateResult<f64> {
    match raw.parse::<f64>() {
        // "-0" parses to negative zero
        Ok(min) if min.is_finite() && min >= 0.0 => Ok(if min == 0.0 { 0.0 } else { min }),
        _ => Err(GateError::invalid_threshold(category, raw)),
    }
}

fn non_empty(inputs: &impl InputProvider, name: &str) -> Option<String> {
    inputs
        .get(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
