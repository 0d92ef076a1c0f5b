//! Parser seam between source text and the syntax model.

use crate::error::ParseError;
use crate::syntax::SourceFile;
use std::path::Path;

/// Turns source text into a [`SourceFile`].
///
/// Implement this to plug a parsing backend into the [`crate::Analyzer`].
/// A parser must reject malformed input with a [`ParseError`] rather than
/// return a partial tree: checks over a half-parsed file would produce a
/// misleading report.
pub trait SourceParser: Send + Sync {
    /// Language identifier (e.g., `"go"`).
    fn language_id(&self) -> &'static str;

    /// Parses `source`, read from `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `source` is not well-formed.
    fn parse(&self, path: &Path, source: &str) -> Result<SourceFile, ParseError>;
}
