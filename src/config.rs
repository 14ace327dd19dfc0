//! Loading of the transformations file.
//! The transformations file is a YAML document listing ignore patterns, user inputs,
//! transformations and before/after hook operations:
//!
//! ```yaml
//! ignore:
//!   - ".git/**"
//! inputs:
//!   - id: name
//!     text: Project name?
//!     type: text
//! transformations:
//!   - name: project name
//!     type: replace
//!     pattern: my-service
//!     replacement: "{{ name }}"
//!     files: ["**/*.md"]
//! before:
//!   operations:
//!     - sh:
//!         - echo "generating {{ name }}"
//! ```

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Root of the transformations document.
#[derive(Debug, Default, Deserialize)]
pub struct TransformationsSpec {
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub inputs: Vec<InputSpec>,
    #[serde(default)]
    pub transformations: Vec<TransformationSpec>,
    #[serde(default)]
    pub before: OperationsSpec,
    #[serde(default)]
    pub after: OperationsSpec,
}

/// A single transformation, applied to the files matching `files`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransformationSpec {
    pub name: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(flatten)]
    pub kind: TransformationKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum TransformationKind {
    #[serde(rename = "include")]
    Include { condition: String, region_marker: Option<String> },
    #[serde(rename = "replace")]
    Replace { pattern: String, replacement: String },
}

/// A value asked from the user, on the command line or interactively.
#[derive(Debug, Clone, Deserialize)]
pub struct InputSpec {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    #[serde(default)]
    pub options: Vec<String>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum InputType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "yesno")]
    YesNo,
    #[serde(rename = "select")]
    Select,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct OperationsSpec {
    #[serde(default)]
    pub operations: Vec<OperationSpec>,
}

/// Shell commands, executed one at a time in declaration order.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationSpec {
    #[serde(default)]
    pub sh: Vec<String>,
}

/// Reads and parses the transformations file.
///
/// # Errors
/// * `Error::ReadError` if the file cannot be read
/// * `Error::SpecParseError` if its content is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TransformationsSpec> {
    let path = path.as_ref();
    debug!("Loading transformations from {}", path.display());
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::ReadError { path: path.display().to_string(), source })?;
    parse_config(&content)
}

/// Parses and validates the content of a transformations file.
///
/// # Errors
/// * `Error::SpecParseError` on invalid YAML, unknown or incomplete entries
pub fn parse_config(content: &str) -> Result<TransformationsSpec> {
    let spec: TransformationsSpec =
        serde_yaml::from_str(content).map_err(|e| Error::SpecParseError(e.to_string()))?;
    validate(&spec)?;
    Ok(spec)
}

fn validate(spec: &TransformationsSpec) -> Result<()> {
    for transformation in &spec.transformations {
        if let TransformationKind::Replace { pattern, .. } = &transformation.kind {
            if pattern.is_empty() {
                return Err(Error::SpecParseError(format!(
                    "transformation '{}' has an empty pattern",
                    transformation.name
                )));
            }
        }
    }
    for input in &spec.inputs {
        if input.input_type == InputType::Select && input.options.is_empty() {
            return Err(Error::SpecParseError(format!(
                "select input '{}' has no options",
                input.id
            )));
        }
    }
    Ok(())
}
