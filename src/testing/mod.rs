//! Crate-internal test doubles for the collaborator ports.

mod buffer_feedback;
mod in_memory_history;
mod recording_import;

pub(crate) use buffer_feedback::BufferFeedback;
pub(crate) use in_memory_history::InMemoryHistory;
pub(crate) use recording_import::RecordingImportService;
