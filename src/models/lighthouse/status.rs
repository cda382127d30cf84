use crate::models::lighthouse::category::Category;
use std::fmt;

pub const FAILURE_HEADER: &str = "Minimum score requirements failed:\n";
pub const ALL_SCORES_MISSING: &str = "All scores were missing from Lighthouse result.";

// A single score that came in under its configured minimum
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreViolation {
    pub url: String,
    pub category: Category,
    pub threshold: f64,
    pub score: f64,
}

impl fmt::Display for ScoreViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: minimum score: {}, actual score: {}",
            self.url, self.category, self.threshold, self.score
        )
    }
}

// Verdict of a single gate evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pass,
    Fail(Vec<String>),
}

impl Outcome {
    pub fn passed(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn failures(&self) -> &[String] {
        match self {
            Outcome::Pass => &[],
            Outcome::Fail(messages) => messages,
        }
    }

    /// Text handed to the status reporter, `None` when the gate passed.
    pub fn failure_report(&self) -> Option<String> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(messages) => Some(format!("{}{}", FAILURE_HEADER, messages.join("\n"))),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            Outcome::Pass => "pass",
            Outcome::Fail(_) => "fail",
        };
        write!(f, "{}", status_str)
    }
}
