//! dsm: Discover and run extension deployment scripts with idempotent
//! execution tracking.
//!
//! A deployment script is a folder of ordered import files under an
//! extension's `resources/<scripts-folder>/` directory. A discovery pass
//! subtracts the already-successful script names from the folders on disk
//! and assembles the rest into phase-tagged scripts; a run executes them in
//! deterministic order and records every outcome, so re-runs only pick up
//! what is still missing.

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;
use std::sync::Arc;

use domain::DeploymentConfig;
use ports::{ExecutionHistory, StdoutFeedback};
use services::{
    CommandImportService, DeploymentScriptFinder, FileExecutionHistory,
    FilesystemExtensionDirectories, RunContext, ScriptRunner,
};

pub use domain::{AppError, PlatformProcess, Script, SystemPhase};
pub use services::RunReport;

const CONFIG_FILE: &str = "deployment.toml";

/// Load `deployment.toml` from the extensions root.
fn load_config(root: &Path) -> Result<DeploymentConfig, AppError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Err(AppError::ConfigMissing(path.display().to_string()));
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(DeploymentConfig::parse_toml(&content)?)
}

fn build_finder(
    root: &Path,
    config: &DeploymentConfig,
    history: Arc<dyn ExecutionHistory>,
) -> DeploymentScriptFinder {
    DeploymentScriptFinder::new(
        Arc::new(FilesystemExtensionDirectories::new(root.to_path_buf())),
        history,
        Arc::new(CommandImportService::new(config.import_command.clone())),
        config.scripts_folder.as_str(),
        config.import_extension.as_str(),
    )
}

/// Pending deployment scripts of an extension, in run order.
///
/// A pure discovery pass: nothing is executed, nothing is written.
pub fn pending_scripts(
    root: &Path,
    extension_name: &str,
    process: PlatformProcess,
) -> Result<Vec<Script>, AppError> {
    let config = load_config(root)?;
    let history: Arc<dyn ExecutionHistory> = Arc::new(FileExecutionHistory::new(root));
    build_finder(root, &config, history).pending_scripts(extension_name, process)
}

/// Execute the pending deployment scripts of an extension and record every
/// outcome in the file-backed history under the extensions root.
pub fn run_pending(
    root: &Path,
    extension_name: &str,
    process: PlatformProcess,
) -> Result<RunReport, AppError> {
    let config = load_config(root)?;
    let history = Arc::new(FileExecutionHistory::new(root));
    let shared: Arc<dyn ExecutionHistory> = history.clone();
    let finder = build_finder(root, &config, shared);
    let runner = ScriptRunner::new(finder, history, config.stacktrace_max_length);

    let ctx = RunContext::with_feedback(extension_name, process, Arc::new(StdoutFeedback));
    runner.run_pending(&ctx)
}
