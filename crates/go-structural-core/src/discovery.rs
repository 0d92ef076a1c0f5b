//! Source file discovery from command-line paths.

use crate::error::AnalyzerError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix of Go source files.
pub const SOURCE_SUFFIX: &str = ".go";

/// Suffix of Go test files, which are never checked.
pub const TEST_FILE_SUFFIX: &str = "_test.go";

/// Directory names skipped while walking.
pub const SKIPPED_DIRS: &[&str] = &["vendor", "testdata", ".git"];

/// Collects Go source files from one path.
///
/// A file path is returned as-is if it is a non-test `.go` file and rejected
/// otherwise. A directory is walked recursively, collecting `.go` files that
/// are not test files and skipping [`SKIPPED_DIRS`].
///
/// # Errors
///
/// Returns an error if the path cannot be inspected, an explicit file is not
/// a Go source file, or the walk fails.
pub fn collect_source_files(path: &Path) -> Result<Vec<PathBuf>, AnalyzerError> {
    let metadata = std::fs::metadata(path).map_err(|source| AnalyzerError::Discovery {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        let name = path.to_string_lossy();
        if name.ends_with(TEST_FILE_SUFFIX) {
            return Err(AnalyzerError::TestFile {
                path: path.to_path_buf(),
            });
        }
        if !name.ends_with(SOURCE_SUFFIX) {
            return Err(AnalyzerError::NotSourceFile {
                path: path.to_path_buf(),
            });
        }
        return Ok(vec![path.to_path_buf()]);
    }

    let mut builder = ignore::WalkBuilder::new(path);
    builder
        .standard_filters(false)
        .filter_entry(|entry| !is_skipped_dir(entry));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.map_err(|source| AnalyzerError::Walk {
            path: path.to_path_buf(),
            source,
        })?;

        if entry.file_type().map_or(true, |t| t.is_dir()) {
            continue;
        }

        let entry_path = entry.path();
        if is_source_file(entry_path) {
            files.push(entry_path.to_path_buf());
        }
    }

    Ok(files)
}

/// Collects Go source files from every path, sorted.
///
/// An empty `paths` slice means the current directory.
///
/// # Errors
///
/// Fails on the first path that [`collect_source_files`] rejects, or with
/// [`AnalyzerError::NoFilesFound`] when nothing was collected.
pub fn discover(paths: &[PathBuf]) -> Result<Vec<PathBuf>, AnalyzerError> {
    let default = [PathBuf::from(".")];
    let paths = if paths.is_empty() { &default[..] } else { paths };

    let mut files = Vec::new();
    for path in paths {
        files.extend(collect_source_files(path)?);
    }

    files.sort();

    if files.is_empty() {
        return Err(AnalyzerError::NoFilesFound {
            paths: paths.to_vec(),
        });
    }

    Ok(files)
}

fn is_source_file(path: &Path) -> bool {
    let name = path.to_string_lossy();
    name.ends_with(SOURCE_SUFFIX) && !name.ends_with(TEST_FILE_SUFFIX)
}

fn is_skipped_dir(entry: &ignore::DirEntry) -> bool {
    let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
    let skipped = is_dir
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name));
    if skipped {
        debug!("Skipping directory: {}", entry.path().display());
    }
    skipped
}
