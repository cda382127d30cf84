use crate::models::lighthouse::category::CategoryScores;
use serde::{Deserialize, Deserializer, Serialize};

// Audit outcome for a single page, as produced by lighthouse-check
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scores: CategoryScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_error: Option<String>,
}

// Root structure of the `lighthouseCheckResults` input
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPayload {
    #[serde(default)]
    pub data: Option<Vec<AuditResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_error: Option<String>,
}

// failed pages may come through with `"scores": null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ResultsPayload {
    pub fn results(&self) -> &[AuditResult] {
        self.data.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ignores_unknown_producer_fields() {
        let payload: ResultsPayload = serde_json::from_str(
            r#"{
                "code": "SUCCESS",
                "data": [{
                    "url": "https://www.foo.software",
                    "emulatedFormFactor": "mobile",
                    "localReport": "/tmp/report.html",
                    "scores": {"performance": 73}
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.results().len(), 1);
        assert_eq!(payload.results()[0].url, "https://www.foo.software");
        assert_eq!(payload.results()[0].scores.performance, Some(73.0));
        assert_eq!(payload.runtime_error, None);
    }

    #[test]
    fn null_scores_mean_nothing_was_scored() {
        let payload: ResultsPayload = serde_json::from_str(
            r#"{"data": [{"url": "https://a.test", "scores": null, "runtimeError": "Chrome crashed"}]}"#,
        )
        .unwrap();

        let result = &payload.results()[0];
        assert_eq!(result.scores, CategoryScores::default());
        assert_eq!(result.runtime_error.as_deref(), Some("Chrome crashed"));
    }

    #[test]
    fn payload_without_data_has_no_results() {
        let payload: ResultsPayload =
            serde_json::from_str(r#"{"runtimeError": "Chrome failed to launch"}"#).unwrap();

        assert!(payload.data.is_none());
        assert!(payload.results().is_empty());
        assert_eq!(payload.runtime_error.as_deref(), Some("Chrome failed to launch"));
    }
}
