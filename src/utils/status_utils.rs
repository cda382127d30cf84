use std::io::{self, Write};

/// Receives the explanation when the gate decides the run has failed.
pub trait StatusReporter {
    fn fail(&mut self, message: &str);
}

// Emits `::error::` workflow commands and remembers that the job must fail
#[derive(Debug)]
pub struct ActionsReporter<W: Write> {
    out: W,
    failed: bool,
}

impl ActionsReporter<io::Stdout> {
    pub fn stdout() -> Self {
        ActionsReporter::new(io::stdout())
    }
}

impl<W: Write> ActionsReporter<W> {
    pub fn new(out: W) -> Self {
        ActionsReporter { out, failed: false }
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed {
            1
        } else {
            0
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StatusReporter for ActionsReporter<W> {
    fn fail(&mut self, message: &str) {
        self.failed = true;
        let written = writeln!(self.out, "::error::{}", escape_command_data(message))
            .and_then(|_| self.out.flush());
        if let Err(e) = written {
            log::error!("Failed to write workflow command: {}", e);
        }
    }
}

// Collects failure messages in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub failures: Vec<String>,
}

impl StatusReporter for RecordingReporter {
    fn fail(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}

/// Escapes a message so multi-line text survives as a single workflow command.
pub fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_newlines_and_percent_signs() {
        assert_eq!(
            escape_command_data("100% failed:\r\nline two"),
            "100%25 failed:%0D%0Aline two"
        );
    }

    #[test]
    fn actions_reporter_writes_error_command() {
        let mut reporter = ActionsReporter::new(Vec::new());
        assert_eq!(reporter.exit_code(), 0);

        reporter.fail("Minimum score requirements failed:\nhttps://a.test: SEO: minimum score: 90, actual score: 80");

        assert!(reporter.failed());
        assert_eq!(reporter.exit_code(), 1);
        let written = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            written,
            "::error::Minimum score requirements failed:%0Ahttps://a.test: SEO: minimum score: 90, actual score: 80\n"
        );
    }
}
