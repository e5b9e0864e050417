use std::sync::Mutex;

use crate::ports::FeedbackSink;

/// Feedback sink buffering every line for later assertions.
#[derive(Debug, Default)]
pub(crate) struct BufferFeedback {
    lines: Mutex<Vec<String>>,
}

impl BufferFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl FeedbackSink for BufferFeedback {
    fn println(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
