use crate::error::{GosourcesError, Result};
use regex::Regex;
use std::path::Path;

/// Language tag placed after the opening fence of every block
pub const LANGUAGE_TAG: &str = "go";

/// Top-level heading every document starts with
pub const DOCUMENT_HEADER: &str = "# Go Source Files";

const FENCE: &str = "```";

/// Accumulating Markdown document: a fixed header followed by one section per file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    sections: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding only the header
    pub fn new() -> Self {
        Self {
            text: header_text(),
            sections: 0,
        }
    }

    /// Appends a `## <path>` heading and a fenced block holding `contents` verbatim
    pub fn push_section(&mut self, relative_path: &Path, contents: &str) {
        let heading = format!("## {}\n\n", relative_path.display());
        let opening = opening_fence();
        let closing = closing_fence();
        self.text
            .reserve(heading.len() + opening.len() + contents.len() + closing.len());

        self.text.push_str(&heading);
        self.text.push_str(&opening);
        self.text.push_str(contents);
        self.text.push_str(&closing);
        self.sections += 1;
    }

    /// Number of sections appended so far
    pub fn section_count(&self) -> usize {
        self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections == 0
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// One heading + fenced block pair read back from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text, the file path relative to the scanned root
    pub path: String,
    /// Raw block content
    pub contents: String,
}

fn header_text() -> String {
    format!("{DOCUMENT_HEADER}\n\n")
}

fn opening_fence() -> String {
    format!("{FENCE}{LANGUAGE_TAG}\n")
}

fn closing_fence() -> String {
    format!("\n{FENCE}\n\n")
}

/// Parses a generated document back into its sections
///
/// A block ends at the first closing fence that is followed either by the end of the
/// document or by the next section heading. Contents holding fences round-trip, except
/// when they contain a closing fence directly followed by a `## <path>` heading and an
/// opening `go` fence: that text is indistinguishable from a section boundary and is
/// read back as two sections.
///
/// # Errors
///
/// - `GosourcesError::MalformedDocument` if the header is missing, a heading is
///   not followed by an opening fence, or a block is never closed.
/// - `GosourcesError::Regex` if the heading pattern fails to compile.
pub fn extract_sections(document: &str) -> Result<Vec<Section>> {
    let header = header_text();
    if !document.starts_with(&header) {
        return Err(GosourcesError::MalformedDocument {
            position: 0,
            message: format!("expected header '{DOCUMENT_HEADER}'"),
        });
    }

    let opener = Regex::new(&format!(
        r"\A## ([^\n]*)\n\n{}{}\n",
        regex::escape(FENCE),
        regex::escape(LANGUAGE_TAG)
    ))?;
    let closer = closing_fence();

    let mut sections = Vec::new();
    let mut pos = header.len();

    while pos < document.len() {
        let rest = &document[pos..];
        let caps = opener
            .captures(rest)
            .ok_or_else(|| GosourcesError::MalformedDocument {
                position: pos,
                message: "expected section heading followed by an opening fence".to_string(),
            })?;

        // Group 0 always exists on a successful match.
        let opener_len = caps.get(0).map_or(0, |m| m.end());
        let path = caps.get(1).map_or("", |m| m.as_str()).to_string();
        let content_start = pos + opener_len;
        let body = &document[content_start..];

        // Candidates may overlap, so step one byte past each rejected one.
        let mut search_from = 0;
        let content_len = loop {
            let Some(idx) = body[search_from..].find(&closer).map(|i| i + search_from) else {
                return Err(GosourcesError::MalformedDocument {
                    position: content_start,
                    message: format!("unterminated code block for '{path}'"),
                });
            };
            let after = &body[idx + closer.len()..];
            if after.is_empty() || opener.is_match(after) {
                break idx;
            }
            search_from = idx + 1;
        };

        sections.push(Section {
            path,
            contents: body[..content_len].to_string(),
        });
        pos = content_start + content_len + closer.len();
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_header_only() {
        let doc = Document::new();
        assert_eq!(doc.as_str(), "# Go Source Files\n\n");
        assert_eq!(doc.section_count(), 0);
        assert!(doc.is_empty());
        assert_eq!(Document::default(), doc);
    }

    #[test]
    fn test_push_section_layout() {
        let mut doc = Document::new();
        doc.push_section(Path::new("main.go"), "package main");
        assert_eq!(
            doc.as_str(),
            "# Go Source Files\n\n## main.go\n\n```go\npackage main\n```\n\n"
        );
        assert_eq!(doc.section_count(), 1);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_push_section_keeps_trailing_newline() {
        let mut doc = Document::new();
        doc.push_section(Path::new("b.go"), "world\n");
        assert!(doc.into_string().ends_with("```go\nworld\n\n```\n\n"));
    }

    #[test]
    fn test_push_section_nested_path() {
        let mut doc = Document::new();
        let path = Path::new("pkg").join("server").join("api.go");
        doc.push_section(&path, "");
        let expected_heading = format!("## {}\n\n", path.display());
        assert!(doc.as_str().contains(&expected_heading));
        assert!(doc.as_str().ends_with("```go\n\n```\n\n"));
    }

    #[test]
    fn test_extract_sections_round_trip() {
        let files = [
            ("a/x.go", "hello"),
            ("b/y.go", "world\n"),
            ("empty.go", ""),
            ("fenced.go", "// ```go\n// example\n// ```\n\nfunc f() {}\n"),
            ("headings.go", "## not a heading\n\n```\n"),
            ("unicode.go", "// 世界 🌍\n"),
        ];

        let mut doc = Document::new();
        for (path, contents) in files {
            doc.push_section(Path::new(path), contents);
        }

        let sections = extract_sections(doc.as_str()).unwrap();
        assert_eq!(sections.len(), files.len());
        for (section, (path, contents)) in sections.iter().zip(files) {
            assert_eq!(section.path, path);
            assert_eq!(section.contents, contents);
        }
    }

    #[test]
    fn test_extract_sections_ambiguous_boundary() {
        // A closing fence followed by a heading and opening fence reads as a new section.
        let mut doc = Document::new();
        doc.push_section(Path::new("a.go"), "x\n```\n\n## fake.go\n\n```go\ny");

        let sections = extract_sections(doc.as_str()).unwrap();
        assert_eq!(doc.section_count(), 1);
        assert_eq!(
            sections,
            vec![
                Section {
                    path: "a.go".to_string(),
                    contents: "x".to_string(),
                },
                Section {
                    path: "fake.go".to_string(),
                    contents: "y".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_extract_sections_header_only() {
        let sections = extract_sections(Document::new().as_str()).unwrap();
        assert!(sections.is_empty());
    }

    #[test]
    fn test_extract_sections_missing_header() {
        let result = extract_sections("## main.go\n\n```go\nx\n```\n\n");
        assert!(matches!(
            result,
            Err(GosourcesError::MalformedDocument { position: 0, .. })
        ));
    }

    #[test]
    fn test_extract_sections_unterminated_block() {
        let mut doc = Document::new().into_string();
        doc.push_str("## main.go\n\n```go\npackage main\n");
        let result = extract_sections(&doc);
        assert!(matches!(
            result,
            Err(GosourcesError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn test_extract_sections_bad_heading() {
        let mut doc = Document::new().into_string();
        doc.push_str("trailing text");
        match extract_sections(&doc) {
            Err(GosourcesError::MalformedDocument { position, .. }) => {
                assert_eq!(position, "# Go Source Files\n\n".len());
            }
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_section_equality() {
        let a = Section {
            path: "main.go".to_string(),
            contents: "package main".to_string(),
        };
        let b = a.clone();
        let c = Section {
            path: "util.go".to_string(),
            contents: "package main".to_string(),
        };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
