//! Filesystem enumeration for mod directory scanning.
//! Uses `walkdir` for recursive traversal; symlink following is opt-in.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::types::errors::{ScanError, ScanResult};

/// Container extensions we recognize; all are zip-format on the inside.
pub const ARCHIVE_EXTENSIONS: &[&str] = &["jar", "zip", "litemod"];

/// Recursively collect every mod archive under `root`, sorted by path.
///
/// Unreadable directory entries are skipped with a warning; only a missing
/// or non-directory root is an error.
pub fn collect_archive_paths(root: &Path, follow_symlinks: bool) -> ScanResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(ScanError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("scan root does not exist: {}", root.display()),
        )));
    }
    if !root.is_dir() {
        return Err(ScanError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("scan root is not a directory: {}", root.display()),
        )));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).follow_links(follow_symlinks) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                log::warn!("skipping unreadable entry: {error}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let extension = match path.extension() {
            Some(ext) => ext.to_string_lossy().to_lowercase(),
            None => continue,
        };
        if ARCHIVE_EXTENSIONS.contains(&extension.as_str()) {
            paths.push(path.to_path_buf());
        }
    }

    paths.sort();
    Ok(paths)
}

#[cfg(test)]
#[path = "tests/walker_tests.rs"]
mod tests;
