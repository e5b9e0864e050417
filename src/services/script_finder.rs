use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::trace;

use crate::domain::{AppError, ImportService, PlatformProcess, Script, Step, SystemPhase};
use crate::ports::{ExecutionHistory, ExtensionDirectories};
use crate::services::fs_scan::{list_files_with_suffix, list_subdirectories, sort_case_insensitive};

const RESOURCES_DIR: &str = "resources";

/// Discovers the pending deployment scripts of an extension.
///
/// A discovery pass is a pure read: it queries the execution history,
/// subtracts the already-successful script names from the folders on disk,
/// and assembles the remainder into phase-tagged scripts in a deterministic,
/// case-insensitive order.
///
/// The history membership test is an exact string match while the run order
/// folds case, so a folder renamed with only a case change counts as a
/// brand-new script. Kept as observed in the field; do not "fix" one side
/// without the other.
pub struct DeploymentScriptFinder {
    directories: Arc<dyn ExtensionDirectories>,
    history: Arc<dyn ExecutionHistory>,
    importer: Arc<dyn ImportService>,
    scripts_folder: String,
    import_extension: String,
}

impl DeploymentScriptFinder {
    /// The scripts-subfolder name and import suffix are host configuration;
    /// there is no built-in default for either.
    pub fn new(
        directories: Arc<dyn ExtensionDirectories>,
        history: Arc<dyn ExecutionHistory>,
        importer: Arc<dyn ImportService>,
        scripts_folder: impl Into<String>,
        import_extension: impl Into<String>,
    ) -> Self {
        Self {
            directories,
            history,
            importer,
            scripts_folder: scripts_folder.into(),
            import_extension: import_extension.into(),
        }
    }

    /// Ordered pending scripts for one extension.
    ///
    /// Collaborator failures propagate unmodified; a missing scripts
    /// directory is "nothing to do", not an error.
    pub fn pending_scripts(
        &self,
        extension_name: &str,
        process: PlatformProcess,
    ) -> Result<Vec<Script>, AppError> {
        let pending_folders = self.folders_to_run(extension_name)?;
        self.assemble_scripts(&pending_folders, extension_name, process)
    }

    fn folders_to_run(&self, extension_name: &str) -> Result<Vec<PathBuf>, AppError> {
        let already_executed = self.history.successfully_executed(extension_name)?;

        let mut pending = Vec::new();
        for folder in self.existing_script_folders(extension_name)? {
            // Exact match: a case-only rename counts as a new script.
            let name = folder_name(&folder);
            if !already_executed.iter().any(|executed| *executed == name) {
                pending.push(folder);
            }
        }
        sort_case_insensitive(&mut pending);
        Ok(pending)
    }

    fn existing_script_folders(&self, extension_name: &str) -> Result<Vec<PathBuf>, AppError> {
        let scripts_dir = self
            .directories
            .extension_dir(extension_name)?
            .join(RESOURCES_DIR)
            .join(&self.scripts_folder);
        list_subdirectories(&scripts_dir)
    }

    fn assemble_scripts(
        &self,
        pending_folders: &[PathBuf],
        extension_name: &str,
        process: PlatformProcess,
    ) -> Result<Vec<Script>, AppError> {
        let mut scripts = Vec::new();
        for folder in pending_folders {
            if let Some(script) = self.create_script(folder, extension_name, process)? {
                scripts.push(script);
            }
        }
        Ok(scripts)
    }

    fn create_script(
        &self,
        folder: &Path,
        extension_name: &str,
        process: PlatformProcess,
    ) -> Result<Option<Script>, AppError> {
        let steps = self.ordered_steps(folder)?;
        if steps.is_empty() {
            // Stray folders without a single import file are not scripts.
            return Ok(None);
        }

        trace!("current platform process: {:?}", process);
        Ok(Some(Script::new(
            folder_name(folder),
            extension_name.to_string(),
            steps,
            SystemPhase::for_process(process),
        )))
    }

    fn ordered_steps(&self, folder: &Path) -> Result<Vec<Step>, AppError> {
        let mut import_files = list_files_with_suffix(folder, &self.import_extension)?;
        sort_case_insensitive(&mut import_files);

        Ok(import_files
            .into_iter()
            .map(|file| Step::new(file, Arc::clone(&self.importer)))
            .collect())
    }
}

fn folder_name(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}
