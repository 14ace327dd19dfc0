//! Entry point tying the transformations file, inputs, variables and tree rewrite together.

use crate::config::load_config;
use crate::constants::{DESTINATION_VAR, SOURCE_VAR};
use crate::error::Result;
use crate::evaluator::{Evaluator, MiniJinjaEvaluator, Variables};
use crate::inputs::collect_inputs;
use crate::processor::{ensure_destination_is_empty, Processor};
use crate::prompt::Prompter;
use crate::transformations::Transformations;
use log::debug;
use std::path::Path;

/// Process environment plus the `source` and `destination` paths.
/// Environment entries that are not valid unicode are skipped.
pub fn collect_variables<S: AsRef<Path>, D: AsRef<Path>>(source: S, destination: D) -> Variables {
    let mut vars: Variables = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect();
    vars.insert(SOURCE_VAR.to_string(), source.as_ref().display().to_string());
    vars.insert(DESTINATION_VAR.to_string(), destination.as_ref().display().to_string());
    vars
}

/// Generates `destination` from `source` with the rules in `spec_path`.
///
/// # Arguments
/// * `spec_path` - Path to the transformations file
/// * `source` - Root of the tree to transform
/// * `destination` - Output directory, must be missing or empty
/// * `cli_args` - Input values given on the command line (`--name value`)
/// * `prompter` - Asks for the inputs missing from `cli_args`
pub fn generate<S: AsRef<str>>(
    spec_path: &Path,
    source: &Path,
    destination: &Path,
    cli_args: &[S],
    prompter: &dyn Prompter,
) -> Result<()> {
    generate_with(spec_path, source, destination, cli_args, prompter, &MiniJinjaEvaluator::new())
}

/// Same as [`generate`] with a custom [`Evaluator`].
pub fn generate_with<S: AsRef<str>>(
    spec_path: &Path,
    source: &Path,
    destination: &Path,
    cli_args: &[S],
    prompter: &dyn Prompter,
    evaluator: &dyn Evaluator,
) -> Result<()> {
    ensure_destination_is_empty(destination)?;
    let spec = load_config(spec_path)?;
    let mut transformations = Transformations::from_spec(&spec);

    let inputs = collect_inputs(transformations.inputs(), cli_args, prompter)?;
    let mut vars = collect_variables(source, destination);
    vars.extend(inputs);

    transformations.template(evaluator, &vars)?;
    debug!("{transformations:#?}");

    Processor::new(&transformations, source, destination).run()
}
