//! Execution history gateway.
//!
//! The store itself (database, file, whatever the host platform uses) is an
//! external collaborator; this port owns only the query/write contract the
//! core needs.

use crate::domain::{AppError, ScriptExecution};

/// Port for the persisted script-execution history of an extension.
pub trait ExecutionHistory {
    /// Names of the scripts already *successfully* executed for the given
    /// extension. Failed attempts must not appear here: they stay eligible
    /// for retry.
    fn successfully_executed(&self, extension_name: &str) -> Result<Vec<String>, AppError>;

    /// Persist the outcome of one script execution.
    ///
    /// # Panics
    ///
    /// Panics if the record's result was never set; persisting a blank
    /// outcome is a programming error in the integration layer.
    fn record(&self, execution: &ScriptExecution) -> Result<(), AppError>;
}
