//! Fatal errors: anything here aborts the whole run.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting, reading, or parsing files.
///
/// Violations are findings, not errors, and never appear here.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A path given on the command line could not be inspected.
    #[error("collecting files from {}", .path.display())]
    Discovery {
        /// The offending path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Walking a directory failed part way.
    #[error("collecting files from {}", .path.display())]
    Walk {
        /// Root of the failed walk.
        path: PathBuf,
        /// Underlying walk failure.
        #[source]
        source: ignore::Error,
    },

    /// An explicit file path is not a Go source file.
    #[error("not a Go source file: {}", .path.display())]
    NotSourceFile {
        /// The rejected path.
        path: PathBuf,
    },

    /// An explicit file path is a Go test file.
    #[error("not a Go source file (test file): {}", .path.display())]
    TestFile {
        /// The rejected path.
        path: PathBuf,
    },

    /// Discovery produced no files at all.
    #[error("no Go files found in {paths:?}")]
    NoFilesFound {
        /// Paths that were searched.
        paths: Vec<PathBuf>,
    },

    /// A discovered file could not be read.
    #[error("reading {}", .path.display())]
    Read {
        /// The unreadable file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A file failed to parse.
    #[error(transparent)]
    Parse(Box<ParseError>),
}

impl AnalyzerError {
    /// Returns the parse diagnostic when this is a parse failure.
    #[must_use]
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for AnalyzerError {
    fn from(err: ParseError) -> Self {
        Self::Parse(Box::new(err))
    }
}

/// Malformed source: the file does not parse as Go.
///
/// Carries the file contents so it can be rendered as a source snippet.
#[derive(Debug, Error, Diagnostic)]
#[error("parsing {}:{}:{}: {}", .path.display(), .line, .column, .message)]
#[diagnostic(code(go_structural::parse))]
pub struct ParseError {
    /// File that failed to parse.
    pub path: PathBuf,
    /// Line of the first error (1-indexed).
    pub line: usize,
    /// Column of the first error (1-indexed).
    pub column: usize,
    /// What went wrong.
    pub message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{message}")]
    span: SourceSpan,
}

impl ParseError {
    /// Creates a parse error positioned at the start of the file.
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        source: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self {
            path,
            line: 1,
            column: 1,
            message: message.into(),
            src: NamedSource::new(name, source.into()),
            span: SourceSpan::from((0, 0)),
        }
    }

    /// Sets the 1-indexed line and column of the error.
    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Sets the byte offset and length highlighted in the snippet.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.span = SourceSpan::from((offset, length));
        self
    }
}
