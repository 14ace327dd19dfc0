//! Per-file transformers built from the `transformations` section of the transformations file.

use crate::config::{TransformationKind, TransformationSpec};
use crate::error::Result;
use crate::evaluator::{Evaluator, Variables};
use crate::file::File;
use crate::pattern::{any_matches, FilePattern};
use std::path::Path;

pub mod include;
pub mod replace;

pub use include::IncludeTransformer;
pub use replace::TextReplacer;

/// A transformation rule. Condition and template state is bound once per
/// run with [`Transformer::bind`], before any file is transformed.
#[derive(Debug, Clone)]
pub enum Transformer {
    Include(IncludeTransformer),
    Replace(TextReplacer),
}

impl Transformer {
    pub fn from_spec(spec: &TransformationSpec) -> Self {
        match &spec.kind {
            TransformationKind::Include { condition, region_marker } => {
                Self::Include(IncludeTransformer::new(spec, condition, region_marker.as_deref()))
            }
            TransformationKind::Replace { pattern, replacement } => {
                Self::Replace(TextReplacer::new(spec, pattern, replacement))
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Include(t) => t.name(),
            Self::Replace(t) => t.name(),
        }
    }

    pub fn files(&self) -> &[FilePattern] {
        match self {
            Self::Include(t) => t.files(),
            Self::Replace(t) => t.files(),
        }
    }

    /// Whether the transformer applies to a path relative to the source root.
    pub fn applies_to<P: AsRef<Path>>(&self, relative_path: P) -> Result<bool> {
        any_matches(self.files(), relative_path)
    }

    pub fn bind(&mut self, evaluator: &dyn Evaluator, vars: &Variables) -> Result<()> {
        match self {
            Self::Include(t) => t.bind(evaluator, vars),
            Self::Replace(t) => t.bind(evaluator, vars),
        }
    }

    pub fn apply(&self, file: File) -> Result<File> {
        match self {
            Self::Include(t) => t.apply(file),
            Self::Replace(t) => t.apply(file),
        }
    }
}
