use crate::error::{GosourcesError, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::WalkDir;

/// File name suffix a file must carry to be collected
pub const TARGET_EXTENSION: &str = ".go";

/// A matching file found beneath the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as produced by the walk (root joined with the relative path)
    pub path: PathBuf,
    /// Path relative to the root, used as the section heading
    pub relative_path: PathBuf,
}

/// Checks that `root` names an existing directory
///
/// # Errors
///
/// Returns `GosourcesError::NotADirectory` if the path is missing or is not a directory.
pub fn validate_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(GosourcesError::NotADirectory {
            path: root.to_path_buf(),
        })
    }
}

/// Exact, case-sensitive suffix match on a file name
pub fn has_extension(file_name: &OsStr, extension: &str) -> bool {
    file_name.to_string_lossy().ends_with(extension)
}

/// Recursively finds every non-directory entry under `root` whose name ends with `extension`.
///
/// Siblings are visited in file-name order so the result is stable across runs.
/// Directory symlinks are not followed. Entries the walk cannot read are logged and skipped.
pub fn find_matching_files(root: &Path, extension: &str) -> Vec<FileEntry> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("{}", GosourcesError::from(e));
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }
        if entry.path_is_symlink() && entry.path().is_dir() {
            continue;
        }
        if !has_extension(entry.file_name(), extension) {
            continue;
        }

        let path = entry.into_path();
        let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        trace!("Matched {}", relative_path.display());
        entries.push(FileEntry {
            path,
            relative_path,
        });
    }

    entries
}

/// Reads the full contents of a file as UTF-8 text
///
/// # Errors
///
/// Returns `GosourcesError::FileRead` carrying the path and the underlying error
/// for missing files, permission problems, invalid UTF-8 and any other I/O failure.
pub fn read_file_contents(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| GosourcesError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
