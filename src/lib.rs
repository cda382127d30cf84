//! Minimum-score gate for Lighthouse audit results.
//!
//! Reads score thresholds and a `lighthouseCheckResults` payload from named
//! inputs, compares every audited page against the thresholds and reports
//! each shortfall in one failure message.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{GateError, GateResult};
pub use models::{Outcome, ResultsPayload, ThresholdConfig};
pub use services::{evaluate, normalize, run_gate, GateInputs};
