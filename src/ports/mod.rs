mod execution_history;
mod extension_directories;
mod feedback_sink;

pub use execution_history::ExecutionHistory;
pub use extension_directories::ExtensionDirectories;
pub use feedback_sink::{FeedbackSink, NoopFeedback, StdoutFeedback};
