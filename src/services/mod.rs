pub mod fs_scan;

mod command_import;
mod extension_filesystem;
mod history_file;
mod run_context;
mod script_finder;
mod script_runner;

pub use command_import::CommandImportService;
pub use extension_filesystem::FilesystemExtensionDirectories;
pub use history_file::FileExecutionHistory;
pub use run_context::RunContext;
pub use script_finder::DeploymentScriptFinder;
pub use script_runner::{RunReport, ScriptRunner};
