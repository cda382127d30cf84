// src/models/mod.rs

pub mod lighthouse;

pub use lighthouse::{
    AuditResult, Category, CategoryScores, Outcome, ResultsPayload, ScoreViolation, Threshold,
    ThresholdConfig,
};
