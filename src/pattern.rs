//! Glob patterns matched against paths relative to the source root.

use crate::error::{Error, Result};
use globset::{GlobBuilder, GlobMatcher};
use once_cell::unsync::OnceCell;
use std::path::Path;

/// A glob pattern compiled on first use.
///
/// `*` and `?` never match a path separator, `**` spans directories:
/// `*.txt` matches `file.txt` but not `sub/file.txt`, `**/*.txt` matches both.
#[derive(Debug, Clone)]
pub struct FilePattern {
    pattern: String,
    matcher: OnceCell<GlobMatcher>,
}

impl FilePattern {
    pub fn new<S: Into<String>>(pattern: S) -> Self {
        Self { pattern: pattern.into(), matcher: OnceCell::new() }
    }

    /// Builds one pattern per string, preserving order. Nothing is compiled here.
    pub fn many<I, S>(patterns: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        patterns.into_iter().map(Self::new).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern has already been compiled.
    pub fn is_compiled(&self) -> bool {
        self.matcher.get().is_some()
    }

    /// Matches `path` against the pattern, compiling it the first time.
    ///
    /// # Errors
    /// * `Error::PatternCompileError` if the pattern is not a valid glob
    pub fn matches<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        let matcher = self.matcher.get_or_try_init(|| {
            GlobBuilder::new(&self.pattern)
                .literal_separator(true)
                .build()
                .map(|glob| glob.compile_matcher())
                .map_err(|source| Error::PatternCompileError {
                    pattern: self.pattern.clone(),
                    source,
                })
        })?;
        Ok(matcher.is_match(path.as_ref()))
    }
}

/// Returns true if any of `patterns` matches `path`.
pub fn any_matches<P: AsRef<Path>>(patterns: &[FilePattern], path: P) -> Result<bool> {
    let path = path.as_ref();
    for pattern in patterns {
        if pattern.matches(path)? {
            return Ok(true);
        }
    }
    Ok(false)
}
