use crate::config::TransformationSpec;
use crate::error::{Error, Result};
use crate::evaluator::{Evaluator, Variables};
use crate::file::File;
use crate::pattern::FilePattern;

/// Replaces every occurrence of a literal pattern with a rendered template.
#[derive(Debug, Clone)]
pub struct TextReplacer {
    name: String,
    pattern: String,
    replacement_template: String,
    files: Vec<FilePattern>,
    replacement: Option<String>,
}

impl TextReplacer {
    pub fn new(spec: &TransformationSpec, pattern: &str, replacement: &str) -> Self {
        Self {
            name: spec.name.clone(),
            pattern: pattern.to_string(),
            replacement_template: replacement.to_string(),
            files: FilePattern::many(spec.files.iter().cloned()),
            replacement: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[FilePattern] {
        &self.files
    }

    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }

    /// Renders the replacement. The search pattern is never templated.
    pub fn bind(&mut self, evaluator: &dyn Evaluator, vars: &Variables) -> Result<()> {
        self.replacement = Some(evaluator.render_template(&self.replacement_template, vars)?);
        Ok(())
    }

    pub fn apply(&self, file: File) -> Result<File> {
        let replacement =
            self.replacement.as_deref().ok_or_else(|| Error::UnboundTransformerError(self.name.clone()))?;
        let contents = file.contents.replace(&self.pattern, replacement);
        Ok(file.with_contents(contents))
    }
}
