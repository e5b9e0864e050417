/// Port for live, fire-and-forget feedback lines during a run.
///
/// Absence is valid: contexts without a sink simply skip the echo.
pub trait FeedbackSink {
    /// Write one line of feedback.
    fn println(&self, line: &str);
}

/// Sink that discards all feedback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFeedback;

impl FeedbackSink for NoopFeedback {
    fn println(&self, _line: &str) {}
}

/// Sink printing to standard output, used by the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutFeedback;

impl FeedbackSink for StdoutFeedback {
    fn println(&self, line: &str) {
        println!("{}", line);
    }
}
