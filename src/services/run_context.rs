use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{PlatformProcess, ScriptExecution};
use crate::ports::FeedbackSink;

/// The extension being initialized or updated during one run.
///
/// Equality and hash are defined by the extension name alone: two contexts
/// for the same extension are the same context regardless of process or
/// attached sink. Callers relying on contexts as deduplication keys must not
/// distinguish by anything else.
pub struct RunContext {
    extension_name: String,
    process: PlatformProcess,
    feedback: Option<Arc<dyn FeedbackSink>>,
}

impl RunContext {
    pub fn new<S: Into<String>>(extension_name: S, process: PlatformProcess) -> Self {
        Self { extension_name: extension_name.into(), process, feedback: None }
    }

    pub fn with_feedback<S: Into<String>>(
        extension_name: S,
        process: PlatformProcess,
        feedback: Arc<dyn FeedbackSink>,
    ) -> Self {
        Self { extension_name: extension_name.into(), process, feedback: Some(feedback) }
    }

    pub fn extension_name(&self) -> &str {
        &self.extension_name
    }

    pub fn process(&self) -> PlatformProcess {
        self.process
    }

    /// Log the outcome of one script execution to the informational log and,
    /// when a sink is attached, echo it there.
    ///
    /// # Panics
    ///
    /// Panics if the record's result was never set. That is a programming
    /// error in the integration layer, not a runtime condition.
    pub fn log_result(&self, execution: &ScriptExecution) {
        let result = execution
            .result()
            .expect("the result of the execution must have been set at this point");

        let message = format!("{}: {}", execution.script_name(), result.description());
        info!("{message}");
        if let Some(sink) = &self.feedback {
            sink.println(&message);
        }
    }

    /// Log an error line; the sink copy gets the "ERROR " prefix so it stands
    /// out from informational result lines. Never fails.
    pub fn log_error(&self, message: &str) {
        error!("{message}");
        if let Some(sink) = &self.feedback {
            sink.println(&format!("ERROR {message}"));
        }
    }
}

impl fmt::Debug for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunContext")
            .field("extension_name", &self.extension_name)
            .field("process", &self.process)
            .field("feedback", &self.feedback.is_some())
            .finish()
    }
}

impl PartialEq for RunContext {
    fn eq(&self, other: &Self) -> bool {
        self.extension_name == other.extension_name
    }
}

impl Eq for RunContext {}

impl Hash for RunContext {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.extension_name.hash(state);
    }
}
