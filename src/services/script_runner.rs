use std::sync::Arc;

use crate::domain::{AppError, ExecutionResult, ScriptExecution};
use crate::ports::ExecutionHistory;
use crate::services::{DeploymentScriptFinder, RunContext};

/// What one run did: the scripts that executed successfully, in order, and
/// the script that stopped the run, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub executed: Vec<String>,
    pub failed: Option<String>,
}

/// Drives one extension's pending scripts to completion.
///
/// Every script execution is recorded through the history port, success or
/// failure, before the outcome is reported through the context. The run
/// stops at the first failing script: later scripts may depend on data the
/// failed one did not import. The failed script stays retryable because only
/// successful records enter the dedup set.
pub struct ScriptRunner {
    finder: DeploymentScriptFinder,
    history: Arc<dyn ExecutionHistory>,
    max_trace_length: Option<usize>,
}

impl ScriptRunner {
    pub fn new(
        finder: DeploymentScriptFinder,
        history: Arc<dyn ExecutionHistory>,
        max_trace_length: Option<usize>,
    ) -> Self {
        Self { finder, history, max_trace_length }
    }

    /// Execute the pending scripts for the context's extension.
    ///
    /// Re-invoking after a failure retries the failed script and everything
    /// behind it; the history re-query makes the whole operation idempotent.
    pub fn run_pending(&self, ctx: &RunContext) -> Result<RunReport, AppError> {
        let scripts = self.finder.pending_scripts(ctx.extension_name(), ctx.process())?;

        let mut executed = Vec::new();
        for script in &scripts {
            let mut execution = ScriptExecution::pending(script.name(), script.extension_name());
            match script.run() {
                Ok(()) => {
                    execution.set_result(ExecutionResult::Success);
                    self.history.record(&execution)?;
                    ctx.log_result(&execution);
                    executed.push(script.name().to_string());
                }
                Err(err) => {
                    execution.set_result(ExecutionResult::failed(
                        err.short_cause_trace(self.max_trace_length),
                    ));
                    self.history.record(&execution)?;
                    ctx.log_result(&execution);
                    ctx.log_error(&format!(
                        "Deployment script '{}' failed, skipping the remaining scripts of '{}'",
                        script.name(),
                        ctx.extension_name()
                    ));
                    return Ok(RunReport { executed, failed: Some(script.name().to_string()) });
                }
            }
        }
        Ok(RunReport { executed, failed: None })
    }
}
