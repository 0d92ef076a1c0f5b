//! Core analyzer for orchestrating lint execution.

use crate::checker;
use crate::discovery;
use crate::error::AnalyzerError;
use crate::parser::SourceParser;
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Builder for configuring an [`Analyzer`].
pub struct AnalyzerBuilder {
    parser: Box<dyn SourceParser>,
    paths: Vec<PathBuf>,
}

impl AnalyzerBuilder {
    /// Creates a builder that parses files with `parser`.
    #[must_use]
    pub fn new<P: SourceParser + 'static>(parser: P) -> Self {
        Self {
            parser: Box::new(parser),
            paths: Vec::new(),
        }
    }

    /// Adds a file or directory to analyze.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Adds multiple files or directories to analyze.
    #[must_use]
    pub fn paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Builds the analyzer. With no paths, the current directory is analyzed.
    #[must_use]
    pub fn build(self) -> Analyzer {
        let paths = if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths
        };

        Analyzer {
            parser: self.parser,
            paths,
        }
    }
}

/// The main analyzer: discovers files, parses them and runs every check.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    parser: Box<dyn SourceParser>,
    paths: Vec<PathBuf>,
}

impl Analyzer {
    /// Creates a new builder using `parser`.
    #[must_use]
    pub fn builder<P: SourceParser + 'static>(parser: P) -> AnalyzerBuilder {
        AnalyzerBuilder::new(parser)
    }

    /// Returns the paths being analyzed.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Analyzes all files and returns the results.
    ///
    /// The batch is all-or-nothing: the first discovery, read or parse
    /// failure aborts the run and no partial result is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery, reading, or parsing fails.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!(
            "Starting {} analysis of {:?}",
            self.parser.language_id(),
            self.paths
        );

        let files = discovery::discover(&self.paths)?;

        info!("Found {} files to analyze", files.len());

        let mut result = LintResult::new();
        for file_path in &files {
            let violations = self.analyze_file(file_path)?;
            result.violations.extend(violations);
            result.files_checked += 1;
        }

        let (errors, warnings) = result.count_by_severity();
        info!(
            "Analysis complete: {} error(s), {} warning(s) in {} files",
            errors, warnings, result.files_checked
        );

        Ok(result)
    }

    /// Parses in-memory `source` and runs every check, reporting under
    /// `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` fails to parse.
    pub fn check_source(&self, path: &Path, source: &str) -> Result<Vec<Violation>, AnalyzerError> {
        let file = self.parser.parse(path, source)?;
        let violations = checker::run(&file, &path.display().to_string());
        debug!(
            "{}: {} declarations, {} violations",
            path.display(),
            file.declarations.len(),
            violations.len()
        );
        Ok(violations)
    }

    /// Reads and analyzes a single file.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.check_source(path, &content)
    }
}
