pub mod category;
pub mod report;
pub mod status;
pub mod thresholds;

pub use category::{Category, CategoryScores};
pub use report::{AuditResult, ResultsPayload};
pub use status::{Outcome, ScoreViolation, ALL_SCORES_MISSING, FAILURE_HEADER};
pub use thresholds::{Threshold, ThresholdConfig};
