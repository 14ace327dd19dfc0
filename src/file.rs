//! In-memory representation of a source file moving through the pipeline.

use std::path::PathBuf;

/// One file of the source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Absolute path of the file in the source tree
    pub full_path: PathBuf,
    /// Path relative to the source root, used for pattern matching and output
    pub relative_path: PathBuf,
    pub contents: String,
    /// Set once a transformer excludes the file from the output; terminal
    pub discarded: bool,
}

impl File {
    pub fn new<P, R, S>(full_path: P, relative_path: R, contents: S) -> Self
    where
        P: Into<PathBuf>,
        R: Into<PathBuf>,
        S: Into<String>,
    {
        Self {
            full_path: full_path.into(),
            relative_path: relative_path.into(),
            contents: contents.into(),
            discarded: false,
        }
    }

    /// Returns the same file marked as discarded, with its contents cleared.
    pub fn discard(self) -> Self {
        Self { contents: String::new(), discarded: true, ..self }
    }

    /// Returns the same file with new contents.
    pub fn with_contents(self, contents: String) -> Self {
        Self { contents, ..self }
    }
}
