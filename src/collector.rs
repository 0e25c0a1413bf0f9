use crate::document::Document;
use crate::error::{GosourcesError, Result};
use crate::fs_utils::{
    FileEntry, TARGET_EXTENSION, find_matching_files, read_file_contents, validate_root,
};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

/// Output file name written to the working directory when no other path is given
pub const DEFAULT_OUTPUT: &str = "go_sources.md";

/// A matching file that could not be read
#[derive(Debug)]
pub struct SkippedFile {
    pub entry: FileEntry,
    pub error: GosourcesError,
}

/// Result of one collection pass over a root directory
#[derive(Debug)]
pub struct Collection {
    /// The assembled document
    pub document: Document,
    /// Files whose contents made it into the document, in document order
    pub included: Vec<FileEntry>,
    /// Files that matched but failed to read
    pub skipped: Vec<SkippedFile>,
}

/// Validates `root`, then reads every matching file beneath it into a document.
///
/// Each file is handled independently: a read failure is logged, recorded in
/// `Collection::skipped` and the pass moves on to the next file.
///
/// # Errors
///
/// Returns `GosourcesError::NotADirectory` if `root` is not an existing directory.
pub fn collect(root: &Path) -> Result<Collection> {
    validate_root(root)?;
    info!("Scanning {} for *{TARGET_EXTENSION} files", root.display());

    let mut collection = Collection {
        document: Document::new(),
        included: Vec::new(),
        skipped: Vec::new(),
    };

    for entry in find_matching_files(root, TARGET_EXTENSION) {
        match read_file_contents(&entry.path) {
            Ok(contents) => {
                debug!(
                    "Included {} ({} bytes)",
                    entry.relative_path.display(),
                    contents.len()
                );
                collection
                    .document
                    .push_section(&entry.relative_path, &contents);
                collection.included.push(entry);
            }
            Err(err) => {
                error!("{err}");
                collection.skipped.push(SkippedFile { entry, error: err });
            }
        }
    }

    info!(
        "Collected {} file(s), skipped {}",
        collection.included.len(),
        collection.skipped.len()
    );
    Ok(collection)
}

/// Writes the document to `output`, replacing any existing file
///
/// # Errors
///
/// Returns `GosourcesError::OutputWrite` with the target path if the write fails.
pub fn write_document(document: &Document, output: &Path) -> Result<()> {
    debug!("Writing output to {}", output.display());
    fs::write(output, document.as_str()).map_err(|source| GosourcesError::OutputWrite {
        path: output.to_path_buf(),
        source,
    })
}
