use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ExtensionDirectories;

/// Resolves extensions as immediate subdirectories of one extensions root.
#[derive(Debug, Clone)]
pub struct FilesystemExtensionDirectories {
    root: PathBuf,
}

impl FilesystemExtensionDirectories {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ExtensionDirectories for FilesystemExtensionDirectories {
    fn extension_dir(&self, extension_name: &str) -> Result<PathBuf, AppError> {
        let dir = self.root.join(extension_name);
        if !dir.is_dir() {
            return Err(AppError::ExtensionNotFound(extension_name.to_string()));
        }
        Ok(dir)
    }
}
