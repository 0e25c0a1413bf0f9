//! # gosources
//!
//! Collects every Go source file under a directory into a single Markdown document,
//! one section per file. Useful for handing a whole Go codebase to a Large Language
//! Model, or for reading it top to bottom.
//!
//! ## Document layout
//!
//! ````text
//! # Go Source Files
//!
//! ## cmd/main.go
//!
//! ```go
//! package main
//! ```
//!
//! ````
//!
//! Files are visited recursively in file-name order. A file that cannot be read as
//! UTF-8 is reported and left out; the rest of the run carries on.
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```no_run
//! use std::path::Path;
//! use gosources::{DEFAULT_OUTPUT, collect, write_document};
//!
//! let collection = collect(Path::new("./my-go-project"))?;
//! println!("{} sections", collection.document.section_count());
//! write_document(&collection.document, Path::new(DEFAULT_OUTPUT))?;
//! # Ok::<(), gosources::GosourcesError>(())
//! ```
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Write go_sources.md for a project
//! gosources ./my-go-project
//!
//! # Only list the files that would be collected
//! gosources ./my-go-project --list=json
//! ```

pub mod collector;
pub mod document;
pub mod error;
pub mod fs_utils;
pub mod logging;

// Re-export main types and functions for convenience
pub use collector::{Collection, DEFAULT_OUTPUT, SkippedFile, collect, write_document};
pub use document::{DOCUMENT_HEADER, Document, LANGUAGE_TAG, Section, extract_sections};
pub use error::{GosourcesError, Result};
pub use fs_utils::{FileEntry, TARGET_EXTENSION, find_matching_files, validate_root};
