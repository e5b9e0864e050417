use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{ExecutionError, ImportService, StepResult};

/// Import-service double recording every file it is asked to apply.
///
/// Optionally fails on one file name to exercise the failure path.
#[derive(Debug, Default)]
pub(crate) struct RecordingImportService {
    imported: Mutex<Vec<PathBuf>>,
    fail_on: Option<String>,
}

impl RecordingImportService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the import of files whose leaf name equals `file_name`.
    pub fn failing_on(self, file_name: &str) -> Self {
        Self { fail_on: Some(file_name.to_string()), ..self }
    }

    /// Leaf names of the imported files, in import order.
    pub fn imported(&self) -> Vec<String> {
        self.imported
            .lock()
            .unwrap()
            .iter()
            .map(|file| file.file_name().unwrap_or_default().to_string_lossy().into_owned())
            .collect()
    }
}

impl ImportService for RecordingImportService {
    fn import_file(&self, file: &Path) -> StepResult {
        self.imported.lock().unwrap().push(file.to_path_buf());

        let leaf = file.file_name().unwrap_or_default().to_string_lossy();
        if self.fail_on.as_deref() == Some(leaf.as_ref()) {
            return StepResult::Failure(ExecutionError::new(format!("import of {leaf} failed")));
        }
        StepResult::Success
    }
}
