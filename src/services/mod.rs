pub mod status_service;

pub use status_service::{evaluate, find_violations, normalize, run_gate, GateInputs};
