//! Capability-scoped filesystem listing used by the script finder.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Immediate subdirectories of `dir`, unordered.
///
/// A missing directory means "no entries", not an error: an extension
/// without a scripts folder simply has no scripts defined.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_dir() {
            subdirs.push(entry.path());
        }
    }
    Ok(subdirs)
}

/// Files directly inside `dir` whose name ends with `suffix`, matched
/// case-insensitively. Unordered.
pub fn list_files_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, AppError> {
    let suffix = suffix.to_lowercase();

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && entry.file_name().to_string_lossy().to_lowercase().ends_with(&suffix)
        {
            files.push(path);
        }
    }
    Ok(files)
}

/// Sort entries by their lowercased leaf name.
///
/// This yields the same order on Windows and Unix-like systems regardless of
/// the native listing order. All entries must share one parent directory:
/// only the file name is compared, never the full path.
pub fn sort_case_insensitive(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| leaf_lowercase(a).cmp(&leaf_lowercase(b)));
}

fn leaf_lowercase(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().to_lowercase()).unwrap_or_default()
}
