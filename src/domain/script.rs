use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{ExecutionError, ImportService, StepResult, SystemPhase};

/// One import-file application within a script.
///
/// Bound at assembly time to exactly one file and the importer that will
/// apply it; immutable afterwards.
pub struct Step {
    import_file: PathBuf,
    importer: Arc<dyn ImportService>,
}

impl Step {
    pub fn new(import_file: PathBuf, importer: Arc<dyn ImportService>) -> Self {
        Self { import_file, importer }
    }

    pub fn import_file(&self) -> &Path {
        &self.import_file
    }

    pub fn run(&self) -> StepResult {
        self.importer.import_file(&self.import_file)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").field("import_file", &self.import_file).finish()
    }
}

/// A unit of deployment work: a named, phase-tagged sequence of steps.
///
/// Constructed by the finder once per discovery pass; folders without a
/// single qualifying import file never become a `Script`.
#[derive(Debug)]
pub struct Script {
    name: String,
    extension_name: String,
    ordered_steps: Vec<Step>,
    phase: SystemPhase,
}

impl Script {
    pub(crate) fn new(
        name: String,
        extension_name: String,
        ordered_steps: Vec<Step>,
        phase: SystemPhase,
    ) -> Self {
        debug_assert!(!ordered_steps.is_empty(), "a script always has at least one step");
        Self { name, extension_name, ordered_steps, phase }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension_name(&self) -> &str {
        &self.extension_name
    }

    /// Steps in execution order.
    pub fn ordered_steps(&self) -> &[Step] {
        &self.ordered_steps
    }

    pub fn phase(&self) -> SystemPhase {
        self.phase
    }

    /// Run every step in insertion order, stopping at the first failure.
    ///
    /// Later import files may depend on earlier ones having already mutated
    /// the data set, so no step runs after a failed one.
    pub fn run(&self) -> Result<(), ExecutionError> {
        for step in &self.ordered_steps {
            if let StepResult::Failure(err) = step.run() {
                return Err(err);
            }
        }
        Ok(())
    }
}
