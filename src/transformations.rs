//! The ordered set of transformers, ignore patterns and hooks of one run.

use crate::config::{InputSpec, TransformationsSpec};
use crate::error::Result;
use crate::evaluator::{Evaluator, Variables};
use crate::file::File;
use crate::hooks::Operation;
use crate::pattern::{any_matches, FilePattern};
use crate::transformer::Transformer;
use log::debug;
use std::path::Path;

/// Everything a run needs, built once from a [`TransformationsSpec`].
#[derive(Debug, Clone)]
pub struct Transformations {
    ignore: Vec<FilePattern>,
    transformers: Vec<Transformer>,
    inputs: Vec<InputSpec>,
    before: Vec<Operation>,
    after: Vec<Operation>,
}

impl Transformations {
    pub fn from_spec(spec: &TransformationsSpec) -> Self {
        Self {
            ignore: FilePattern::many(spec.ignore.iter().cloned()),
            transformers: spec.transformations.iter().map(Transformer::from_spec).collect(),
            inputs: spec.inputs.clone(),
            before: Operation::from_spec(&spec.before),
            after: Operation::from_spec(&spec.after),
        }
    }

    pub fn transformers(&self) -> &[Transformer] {
        &self.transformers
    }

    pub fn inputs(&self) -> &[InputSpec] {
        &self.inputs
    }

    pub fn before(&self) -> &[Operation] {
        &self.before
    }

    pub fn after(&self) -> &[Operation] {
        &self.after
    }

    /// True if any ignore pattern matches the path.
    pub fn is_globally_ignored<P: AsRef<Path>>(&self, relative_path: P) -> Result<bool> {
        any_matches(&self.ignore, relative_path)
    }

    /// True if at least one transformer applies to the path.
    pub fn is_transformed<P: AsRef<Path>>(&self, relative_path: P) -> Result<bool> {
        let relative_path = relative_path.as_ref();
        for transformer in &self.transformers {
            if transformer.applies_to(relative_path)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Binds every transformer and hook operation to `vars`.
    ///
    /// Either everything is bound or, on the first failure, nothing is.
    pub fn template(&mut self, evaluator: &dyn Evaluator, vars: &Variables) -> Result<()> {
        let mut transformers = self.transformers.clone();
        for transformer in &mut transformers {
            transformer.bind(evaluator, vars)?;
        }
        let mut before = self.before.clone();
        let mut after = self.after.clone();
        for operation in before.iter_mut().chain(after.iter_mut()) {
            operation.bind(evaluator, vars)?;
        }

        self.transformers = transformers;
        self.before = before;
        self.after = after;
        Ok(())
    }

    /// Applies, in declaration order, every transformer matching the file.
    /// Once a transformer discards the file the remaining ones are skipped.
    pub fn transform(&self, mut file: File) -> Result<File> {
        for transformer in &self.transformers {
            if file.discarded {
                break;
            }
            if transformer.applies_to(&file.relative_path)? {
                debug!("Applying '{}' to {}", transformer.name(), file.relative_path.display());
                file = transformer.apply(file)?;
            }
        }
        Ok(file)
    }
}
