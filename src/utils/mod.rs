pub mod file_utils;
pub mod input_utils;
pub mod log_utils;
pub mod status_utils;

pub use file_utils::{save_report, save_status_report, StatusReport, STATUS_REPORT_FILE};
pub use input_utils::{EnvInputs, InputProvider, MapInputs};
pub use log_utils::init_logging;
pub use status_utils::{escape_command_data, ActionsReporter, RecordingReporter, StatusReporter};
