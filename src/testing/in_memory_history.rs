use std::sync::Mutex;

use crate::domain::{AppError, ScriptExecution};
use crate::ports::ExecutionHistory;

#[derive(Debug)]
struct StoredRecord {
    extension_name: String,
    script_name: String,
    success: bool,
}

/// In-memory execution history for tests.
///
/// Seed already-executed scripts via the builder, then hand the double to
/// production code behind an `Arc`.
#[derive(Debug, Default)]
pub(crate) struct InMemoryHistory {
    records: Mutex<Vec<StoredRecord>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed successful executions for an extension.
    pub fn with_executed(self, extension_name: &str, script_names: &[&str]) -> Self {
        {
            let mut records = self.records.lock().unwrap();
            for script_name in script_names {
                records.push(StoredRecord {
                    extension_name: extension_name.to_string(),
                    script_name: script_name.to_string(),
                    success: true,
                });
            }
        }
        self
    }

    /// All recorded (script, success) pairs, in record order.
    pub fn recorded(&self) -> Vec<(String, bool)> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|record| (record.script_name.clone(), record.success))
            .collect()
    }
}

impl ExecutionHistory for InMemoryHistory {
    fn successfully_executed(&self, extension_name: &str) -> Result<Vec<String>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.success && record.extension_name == extension_name)
            .map(|record| record.script_name.clone())
            .collect())
    }

    fn record(&self, execution: &ScriptExecution) -> Result<(), AppError> {
        let result = execution
            .result()
            .expect("the result of the execution must have been set before it is recorded");
        self.records.lock().unwrap().push(StoredRecord {
            extension_name: execution.extension_name().to_string(),
            script_name: execution.script_name().to_string(),
            success: result.is_success(),
        });
        Ok(())
    }
}
