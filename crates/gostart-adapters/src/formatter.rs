//! Source formatters.

use std::io::Write;
use std::process::{Command, Stdio};

use gostart_core::application::ports::{FormatError, SourceFormatter};
use tracing::{debug, instrument};

/// Pipes source through `gofmt` (or a compatible command reading stdin and
/// writing the formatted program to stdout).
#[derive(Debug, Clone)]
pub struct GofmtFormatter {
    program: String,
    args: Vec<String>,
}

impl GofmtFormatter {
    pub const DEFAULT_COMMAND: &'static str = "gofmt";

    pub fn new() -> Self {
        Self::from_command_line(Self::DEFAULT_COMMAND)
    }

    /// Parse a whitespace-separated command line, e.g. `goimports -local x`.
    /// An empty line falls back to `gofmt`.
    pub fn from_command_line(command_line: &str) -> Self {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        match parts.next() {
            Some(program) => Self {
                program,
                args: parts.collect(),
            },
            None => Self {
                program: Self::DEFAULT_COMMAND.to_string(),
                args: Vec::new(),
            },
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn unavailable(&self, reason: impl ToString) -> FormatError {
        FormatError::Unavailable {
            command: self.program.clone(),
            reason: reason.to_string(),
        }
    }
}

impl Default for GofmtFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFormatter for GofmtFormatter {
    #[instrument(skip_all, fields(program = %self.program))]
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.unavailable(e))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.unavailable("stdin not captured"))?;

        // Stdin is fed from its own thread: a formatter may fill the stdout
        // pipe before it has read all of its input. The pipe closes when the
        // writer returns.
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(source.as_bytes()));
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output = output.map_err(|e| self.unavailable(e))?;
        if !output.status.success() {
            return Err(FormatError::Rejected {
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        match written {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(self.unavailable(e)),
            Err(_) => return Err(self.unavailable("stdin writer panicked")),
        }

        let formatted = String::from_utf8(output.stdout).map_err(|e| FormatError::Rejected {
            reason: format!("formatter produced invalid UTF-8: {e}"),
        })?;
        debug!(bytes = formatted.len(), "formatted source");
        Ok(formatted)
    }
}

/// Returns the source unchanged. Used when formatting is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

impl SourceFormatter for PassthroughFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}
