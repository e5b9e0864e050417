use std::path::PathBuf;

use crate::domain::AppError;

/// Port resolving an extension name to its directory on disk.
pub trait ExtensionDirectories {
    /// Absolute path of the named extension's directory.
    fn extension_dir(&self, extension_name: &str) -> Result<PathBuf, AppError>;
}
