use crate::services::status_service::GateRun;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const STATUS_REPORT_FILE: &str = "lighthouse-gate.json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub passed: bool,
    pub failures: Vec<String>,
    pub thresholds: BTreeMap<String, f64>,
    pub generated_at: String,
}

impl From<&GateRun> for StatusReport {
    fn from(run: &GateRun) -> Self {
        StatusReport {
            passed: run.outcome.passed(),
            failures: run.outcome.failures().to_vec(),
            thresholds: run.inputs.config.configured(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Writes the status report into `output_dir`, creating it when needed.
pub async fn save_report(output_dir: &Path, report: &StatusReport) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let output_path = output_dir.join(STATUS_REPORT_FILE);
    let json = serde_json::to_vec_pretty(report)?;
    fs::write(&output_path, json)
        .await
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;

    Ok(output_path)
}

/// Saves the status report when `outputDirectory` was configured.
///
/// A failed write is only logged; the verdict in `run` stands either way.
pub async fn save_status_report(run: &GateRun) -> Option<PathBuf> {
    let output_dir = run.inputs.config.output_directory.as_ref()?;

    match save_report(output_dir, &StatusReport::from(run)).await {
        Ok(path) => {
            info!("Status report saved at: {}", path.display());
            Some(path)
        }
        Err(e) => {
            warn!("Could not save status report: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Outcome, ResultsPayload, Threshold, ThresholdConfig};
    use crate::services::{run_gate, GateInputs};
    use crate::utils::{MapInputs, RecordingReporter};

    #[tokio::test]
    async fn saves_report_into_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("lighthouse").join("status");

        let mut config = ThresholdConfig::default();
        config.performance = Threshold::Value(95.0);
        let run = GateRun {
            inputs: GateInputs {
                config,
                payload: ResultsPayload::default(),
            },
            outcome: Outcome::Fail(vec!["https://a.test: Performance: minimum score: 95, actual score: 90".to_string()]),
        };

        let path = save_report(&output_dir, &StatusReport::from(&run))
            .await
            .unwrap();

        assert_eq!(path, output_dir.join(STATUS_REPORT_FILE));
        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["passed"], false);
        assert_eq!(written["thresholds"]["minPerformanceScore"], 95.0);
        assert_eq!(written["failures"].as_array().unwrap().len(), 1);
        assert!(written["generatedAt"].is_string());
    }

    #[tokio::test]
    async fn unwritable_output_directory_keeps_the_verdict() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let output_dir = blocker.path().join("reports");
        let inputs = MapInputs::from_pairs([
            ("minPerformanceScore", "95"),
            ("outputDirectory", output_dir.to_str().unwrap()),
            (
                "lighthouseCheckResults",
                r#"{"data": [{"url": "https://a.test", "scores": {"performance": 90}}]}"#,
            ),
        ]);
        let mut reporter = RecordingReporter::default();
        let run = run_gate(&inputs, &mut reporter).unwrap();
        let outcome_before = run.outcome.clone();
        let failures_before = reporter.failures.clone();

        assert_eq!(save_status_report(&run).await, None);

        assert_eq!(run.outcome, outcome_before);
        assert_eq!(
            run.outcome.failures(),
            ["https://a.test: Performance: minimum score: 95, actual score: 90"]
        );
        assert_eq!(reporter.failures, failures_before);
        assert_eq!(reporter.failures.len(), 1);
        assert!(!output_dir.exists());
    }

    #[tokio::test]
    async fn nothing_is_saved_without_output_directory() {
        let run = GateRun {
            inputs: GateInputs {
                config: ThresholdConfig::default(),
                payload: ResultsPayload::default(),
            },
            outcome: Outcome::Pass,
        };

        assert_eq!(save_status_report(&run).await, None);
    }
}
