use crate::config::TransformationSpec;
use crate::constants::{BEGIN_KEYWORD, END_KEYWORD};
use crate::error::{Error, Result};
use crate::evaluator::{Evaluator, Variables};
use crate::file::File;
use crate::pattern::FilePattern;

/// Keeps or drops whole files, or marked regions inside them, depending on
/// a condition.
#[derive(Debug, Clone)]
pub struct IncludeTransformer {
    name: String,
    condition: String,
    region_marker: Option<String>,
    files: Vec<FilePattern>,
    /// Value of `condition` once bound to the variables of the run
    truthy: Option<bool>,
}

impl IncludeTransformer {
    pub fn new(spec: &TransformationSpec, condition: &str, region_marker: Option<&str>) -> Self {
        Self {
            name: spec.name.clone(),
            condition: condition.to_string(),
            region_marker: region_marker.filter(|m| !m.is_empty()).map(str::to_string),
            files: FilePattern::many(spec.files.iter().cloned()),
            truthy: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[FilePattern] {
        &self.files
    }

    pub fn truthy(&self) -> Option<bool> {
        self.truthy
    }

    pub fn bind(&mut self, evaluator: &dyn Evaluator, vars: &Variables) -> Result<()> {
        self.truthy = Some(evaluator.evaluate_condition(&self.condition, vars)?);
        Ok(())
    }

    pub fn apply(&self, file: File) -> Result<File> {
        let truthy = self.truthy.ok_or_else(|| Error::UnboundTransformerError(self.name.clone()))?;
        match &self.region_marker {
            None if truthy => Ok(file),
            None => Ok(file.discard()),
            Some(marker) => {
                let contents = strip_regions(&file.contents, marker, truthy);
                Ok(file.with_contents(contents))
            }
        }
    }
}

/// Removes the marker lines of every `marker` region and, unless `keep`,
/// the lines between them. The trailing newline of `input` is preserved.
fn strip_regions(input: &str, marker: &str, keep: bool) -> String {
    let mut output = String::with_capacity(input.len());
    let mut inside = false;

    for line in input.split_inclusive('\n') {
        if is_marker(line, BEGIN_KEYWORD, marker) {
            inside = true;
        } else if is_marker(line, END_KEYWORD, marker) {
            inside = false;
        } else if keep || !inside {
            output.push_str(line);
        }
    }

    if !input.ends_with('\n') {
        if let Some(stripped) = output.strip_suffix('\n') {
            let len = stripped.strip_suffix('\r').unwrap_or(stripped).len();
            output.truncate(len);
        }
    }
    output
}

/// Marker lines may carry other text, e.g. `# BEGIN ci`, `//END ci` or `<!--BEGIN ci-->`.
/// `<keyword> <marker>` must not be part of a longer word, so `APPEND ci`
/// is not an end marker and `BEGIN circle` does not open `ci`.
fn is_marker(line: &str, keyword: &str, marker: &str) -> bool {
    let needle = format!("{keyword} {marker}");
    line.match_indices(&needle).any(|(start, _)| {
        let before = line[..start].chars().next_back();
        let after = line[start + needle.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
