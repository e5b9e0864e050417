use std::error::Error as _;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

/// Failure of one import-file application.
///
/// Carries the full cause chain; truncation to a configured maximum length
/// happens only when rendering for display, it is not part of the error's
/// identity.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExecutionError {
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ExecutionError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into(), cause: None }
    }

    pub fn with_cause<S, E>(message: S, cause: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self { message: message.into(), cause: Some(Box::new(cause)) }
    }

    /// Render the message followed by every link of the cause chain.
    pub fn cause_trace(&self) -> String {
        let mut rendered = self.message.clone();
        let mut source = self.source();
        while let Some(err) = source {
            rendered.push_str("\ncaused by: ");
            rendered.push_str(&err.to_string());
            source = err.source();
        }
        rendered
    }

    /// Render the cause chain, cut down to `max_length` bytes when a limit
    /// is configured. `None` and `0` both mean unlimited.
    pub fn short_cause_trace(&self, max_length: Option<usize>) -> String {
        let mut output = self.cause_trace();
        if let Some(max) = max_length.filter(|max| *max > 0)
            && output.len() > max
        {
            debug!("returning the first {max} bytes of the cause trace");
            let mut cut = max;
            while !output.is_char_boundary(cut) {
                cut -= 1;
            }
            output.truncate(cut);
        }
        output
    }
}

/// Outcome of one script execution, with a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Success,
    Failed(String),
}

impl ExecutionResult {
    pub fn failed<S: Into<String>>(description: S) -> Self {
        ExecutionResult::Failed(description.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success)
    }

    pub fn description(&self) -> &str {
        match self {
            ExecutionResult::Success => "executed successfully",
            ExecutionResult::Failed(description) => description,
        }
    }
}

/// Execution record for one script within one extension.
///
/// Persistence belongs to the history store; this is the value handed across
/// that boundary. A successful record is terminal: the script name never
/// reappears in a pending set for its extension.
#[derive(Debug, Clone)]
pub struct ScriptExecution {
    script_name: String,
    extension_name: String,
    result: Option<ExecutionResult>,
    executed_at: DateTime<Utc>,
}

impl ScriptExecution {
    /// Create a record for a script about to run; the result is unset until
    /// the run finishes.
    pub fn pending<S: Into<String>, E: Into<String>>(script_name: S, extension_name: E) -> Self {
        Self {
            script_name: script_name.into(),
            extension_name: extension_name.into(),
            result: None,
            executed_at: Utc::now(),
        }
    }

    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    pub fn extension_name(&self) -> &str {
        &self.extension_name
    }

    pub fn result(&self) -> Option<&ExecutionResult> {
        self.result.as_ref()
    }

    pub fn executed_at(&self) -> DateTime<Utc> {
        self.executed_at
    }

    /// Record the outcome and stamp the execution time.
    pub fn set_result(&mut self, result: ExecutionResult) {
        self.result = Some(result);
        self.executed_at = Utc::now();
    }
}
