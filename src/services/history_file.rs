//! TOML-file-backed execution history.
//!
//! The host platform normally brings its own store; this adapter makes the
//! standalone CLI self-sufficient. Records live in
//! `<root>/.dsm/executions.toml`, appended on every run.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, ScriptExecution};
use crate::ports::ExecutionHistory;

const STORE_DIR: &str = ".dsm";
const STORE_FILE: &str = "executions.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct ExecutionLog {
    #[serde(default)]
    execution: Vec<StoredExecution>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredExecution {
    script_name: String,
    extension_name: String,
    success: bool,
    description: String,
    executed_at: DateTime<Utc>,
}

/// `ExecutionHistory` persisted as a TOML file under the extensions root.
#[derive(Debug, Clone)]
pub struct FileExecutionHistory {
    path: PathBuf,
}

impl FileExecutionHistory {
    pub fn new(root: &Path) -> Self {
        Self { path: root.join(STORE_DIR).join(STORE_FILE) }
    }

    fn load(&self) -> Result<ExecutionLog, AppError> {
        if !self.path.exists() {
            return Ok(ExecutionLog::default());
        }
        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| AppError::History {
            path: self.path.display().to_string(),
            details: e.to_string(),
        })
    }

    fn save(&self, log: &ExecutionLog) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(log).map_err(|e| AppError::History {
            path: self.path.display().to_string(),
            details: e.to_string(),
        })?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl ExecutionHistory for FileExecutionHistory {
    fn successfully_executed(&self, extension_name: &str) -> Result<Vec<String>, AppError> {
        let log = self.load()?;
        Ok(log
            .execution
            .into_iter()
            .filter(|record| record.success && record.extension_name == extension_name)
            .map(|record| record.script_name)
            .collect())
    }

    fn record(&self, execution: &ScriptExecution) -> Result<(), AppError> {
        let result = execution
            .result()
            .expect("the result of the execution must have been set before it is recorded");

        let mut log = self.load()?;
        log.execution.push(StoredExecution {
            script_name: execution.script_name().to_string(),
            extension_name: execution.extension_name().to_string(),
            success: result.is_success(),
            description: result.description().to_string(),
            executed_at: execution.executed_at(),
        });
        self.save(&log)
    }
}
