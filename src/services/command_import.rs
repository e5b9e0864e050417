use std::path::Path;
use std::process::Command;

use crate::domain::{ExecutionError, ImportService, StepResult};

/// `ImportService` applying files through a configured external command.
///
/// The command line is split on whitespace into program and fixed arguments;
/// the import file's path is appended as the last argument. Exit status 0 is
/// success. Everything the command reports, including a failure to start it,
/// goes into the step result rather than up the call stack.
#[derive(Debug, Clone)]
pub struct CommandImportService {
    command: Option<String>,
}

impl CommandImportService {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }
}

impl ImportService for CommandImportService {
    fn import_file(&self, file: &Path) -> StepResult {
        let Some(command_line) = self.command.as_deref() else {
            return StepResult::Failure(ExecutionError::new(format!(
                "no import command configured, cannot apply {}",
                file.display()
            )));
        };

        let mut parts = command_line.split_whitespace();
        let Some(program) = parts.next() else {
            return StepResult::Failure(ExecutionError::new(
                "the configured import command is empty",
            ));
        };

        match Command::new(program).args(parts).arg(file).output() {
            Err(err) => StepResult::Failure(ExecutionError::with_cause(
                format!("failed to start import command '{program}'"),
                err,
            )),
            Ok(output) if output.status.success() => StepResult::Success,
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                let details =
                    if stderr.is_empty() { output.status.to_string() } else { stderr };
                StepResult::Failure(ExecutionError::new(format!(
                    "import of {} failed: {}",
                    file.display(),
                    details
                )))
            }
        }
    }
}
