//! Test-file discovery: the rule only applies to Go test files, found
//! by the `_test.go` suffix.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{IoError, Result};

/// The suffix-based test-file predicate.
pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with("_test.go"))
        .unwrap_or(false)
}

/// Collect the test files under `path`, in sorted order so repeated
/// runs report in the same sequence. A single file path is returned
/// as-is when it qualifies. Hidden directories and `vendor/` are
/// skipped; unreadable entries are logged and ignored.
pub fn discover_test_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(IoError::walk_failed(path, "path does not exist").into());
    }

    if path.is_file() {
        if is_test_file(path) {
            return Ok(vec![path.to_path_buf()]);
        }
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    // The root is exempt from the skip rules: the caller asked for it
    // by name, even if it is a dot-directory.
    let walker = WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e.path()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(%err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && is_test_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    debug!(count = files.len(), "discovered test files");
    Ok(files)
}

fn is_skipped_dir(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name == "vendor" || (name.starts_with('.') && name.len() > 1)
}
