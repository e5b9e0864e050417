//! Shared testing utilities for dsm CLI and library tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scripts-subfolder name used by every test configuration.
#[allow(dead_code)]
pub const SCRIPTS_FOLDER: &str = "update-scripts";

/// Testing harness providing an isolated extensions root.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated extensions root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path of the extensions root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write `deployment.toml` with the given import command.
    pub fn write_config(&self, import_command: &str) {
        let content = format!(
            "scripts_folder = \"{}\"\nimport_command = \"{}\"\n",
            SCRIPTS_FOLDER, import_command
        );
        fs::write(self.root().join("deployment.toml"), content)
            .expect("Failed to write deployment.toml");
    }

    /// Write `deployment.toml` without an import command.
    pub fn write_config_without_command(&self) {
        let content = format!("scripts_folder = \"{}\"\n", SCRIPTS_FOLDER);
        fs::write(self.root().join("deployment.toml"), content)
            .expect("Failed to write deployment.toml");
    }

    /// Create an extension directory with an empty scripts tree.
    pub fn add_extension(&self, extension: &str) {
        let dir = self.root().join(extension).join("resources").join(SCRIPTS_FOLDER);
        fs::create_dir_all(dir).expect("Failed to create scripts directory");
    }

    /// Create an extension directory without any scripts folder.
    pub fn add_extension_without_scripts(&self, extension: &str) {
        fs::create_dir_all(self.root().join(extension))
            .expect("Failed to create extension directory");
    }

    /// Create one script folder with the given import files.
    pub fn add_script(&self, extension: &str, script: &str, files: &[&str]) {
        let folder = self
            .root()
            .join(extension)
            .join("resources")
            .join(SCRIPTS_FOLDER)
            .join(script);
        fs::create_dir_all(&folder).expect("Failed to create script folder");
        for file in files {
            fs::write(folder.join(file), "# import data\n").expect("Failed to write import file");
        }
    }

    /// Build a command for invoking the compiled `dsm` binary in the root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dsm").expect("Failed to locate dsm binary");
        cmd.current_dir(self.root());
        cmd
    }

    /// Path of the file-backed execution history.
    pub fn executions_file(&self) -> PathBuf {
        self.root().join(".dsm").join("executions.toml")
    }
}
