//! Import-file application contract.
//!
//! The importer owns everything about a file's content; this crate only
//! hands it paths and reads the outcome. Expected import failures travel
//! inside the [`StepResult`], never as a propagated error.

use std::path::Path;

use crate::domain::ExecutionError;

/// Outcome of applying one import file.
#[derive(Debug)]
pub enum StepResult {
    Success,
    Failure(ExecutionError),
}

impl StepResult {
    pub fn is_success(&self) -> bool {
        matches!(self, StepResult::Success)
    }

    /// The failure cause, if the step failed.
    pub fn error(&self) -> Option<&ExecutionError> {
        match self {
            StepResult::Success => None,
            StepResult::Failure(err) => Some(err),
        }
    }
}

/// Collaborator applying import files to the running system.
pub trait ImportService {
    /// Apply the given file. Import errors are reported through the result;
    /// only unexpected infrastructure problems should ever panic or abort.
    fn import_file(&self, file: &Path) -> StepResult;
}
