// src/services/status_service/mod.rs

pub mod evaluate;
pub mod normalize;

pub use evaluate::{evaluate, find_violations};
pub use normalize::{normalize, parse_results, GateInputs};

use crate::error::GateResult;
use crate::models::Outcome;
use crate::utils::{InputProvider, StatusReporter};
use log::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct GateRun {
    pub inputs: GateInputs,
    pub outcome: Outcome,
}

/// Runs the whole gate: normalize the inputs, evaluate them, and tell the
/// reporter about any failure.
///
/// Structural errors are reported the same way as score failures before
/// being returned, so the host always sees a failed status.
pub fn run_gate(
    inputs: &impl InputProvider,
    reporter: &mut impl StatusReporter,
) -> GateResult<GateRun> {
    let result = normalize(inputs).and_then(|inputs| {
        log_page_errors(&inputs);
        let outcome = evaluate(&inputs.config, &inputs.payload)?;
        Ok(GateRun { inputs, outcome })
    });

    match &result {
        Ok(run) => match run.outcome.failure_report() {
            Some(report) => {
                info!(
                    "❌ {} minimum score requirement(s) failed",
                    run.outcome.failures().len()
                );
                reporter.fail(&report);
            }
            None => info!(
                "✅ All {} audited page(s) met the minimum scores",
                run.inputs.payload.results().len()
            ),
        },
        Err(e) => reporter.fail(&e.to_string()),
    }

    result
}

fn log_page_errors(inputs: &GateInputs) {
    debug!("Configured thresholds: {:?}", inputs.config.configured());

    for result in inputs.payload.results() {
        if let Some(error) = &result.runtime_error {
            warn!("Lighthouse reported an error for {}: {}", result.url, error);
        }
    }
}
