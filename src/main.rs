use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use gosources::logging::{init_logging, verbosity_level};
use gosources::{
    DEFAULT_OUTPUT, Result, TARGET_EXTENSION, collect, find_matching_files, validate_root,
    write_document,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::error;

const LONG_HELP: &str = r#"
Output layout:
  # Go Source Files

  ## <path relative to ROOT>

  ```go
  <file contents>
  ```

Every *.go file under ROOT is included, visited recursively in file-name order.
Files that cannot be read as UTF-8 are reported and skipped.

Examples:
  # Write go_sources.md in the current directory
  gosources ./my-go-project
  # Write somewhere else
  gosources ./my-go-project -o /tmp/context.md
  # List the files that would be collected
  gosources ./my-go-project --list
  # List with sizes, or as JSON for scripting
  gosources ./my-go-project --list=detailed
  gosources ./my-go-project --list=json
  # Show progress
  gosources ./my-go-project -v
"#;

/// Collect Go source files into a single Markdown document.
#[derive(Parser, Debug)]
#[command(
    name = "gosources",
    version,
    about = "Collect Go source files into a single Markdown document.",
    after_long_help = LONG_HELP
)]
struct Cli {
    /// Directory to scan recursively
    #[arg(value_name = "ROOT")]
    root: PathBuf,

    /// Output file, overwritten if it exists
    #[arg(short, long, value_name = "FILE", env = "GOSOURCES_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// List matching files instead of writing the document (optionally with format: plain, detailed, json)
    #[arg(long, value_name = "FORMAT", num_args = 0..=1, default_missing_value = "plain")]
    list: Option<ListFormat>,

    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq)]
enum ListFormat {
    /// One relative path per line
    Plain,
    /// Relative path, full path and size
    Detailed,
    /// JSON output for scripting
    Json,
}

#[derive(Serialize)]
struct ListedFile {
    path: String,
    relative_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
}

fn main() {
    // Usage errors exit with 1 rather than clap's default of 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    init_logging(verbosity_level(cli.quiet, cli.verbose));

    let result = if let Some(format) = cli.list {
        list_files(&cli.root, format)
    } else {
        create_document(&cli.root, &cli.output, cli.quiet)
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn create_document(root: &Path, output: &Path, quiet: bool) -> Result<()> {
    let collection = collect(root)?;

    // A failed write is reported but does not change the exit status.
    match write_document(&collection.document, output) {
        Ok(()) => {
            if !quiet {
                println!("Successfully created {}", output.display());
            }
        }
        Err(e) => error!("{e}"),
    }

    Ok(())
}

fn list_files(root: &Path, format: ListFormat) -> Result<()> {
    validate_root(root)?;
    let entries = find_matching_files(root, TARGET_EXTENSION);

    match format {
        ListFormat::Plain => {
            for entry in &entries {
                println!("{}", entry.relative_path.display());
            }
        }
        ListFormat::Detailed => {
            for entry in &entries {
                println!("File: {}", entry.relative_path.display());
                println!("  Path: {}", entry.path.display());
                match std::fs::metadata(&entry.path) {
                    Ok(metadata) => println!("  Size: {} bytes", metadata.len()),
                    Err(e) => println!("  Error: {e}"),
                }
                println!();
            }
            println!("Summary: {} matching files", entries.len());
        }
        ListFormat::Json => {
            let listed: Vec<ListedFile> = entries
                .iter()
                .map(|entry| ListedFile {
                    path: entry.path.display().to_string(),
                    relative_path: entry.relative_path.display().to_string(),
                    size: std::fs::metadata(&entry.path).ok().map(|m| m.len()),
                })
                .collect();

            let json = serde_json::to_string_pretty(&listed)?;
            println!("{json}");
        }
    }

    Ok(())
}
