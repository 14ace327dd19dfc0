//! Resolution of user inputs into variables.
//! Values come from the arguments following `--` on the command line
//! (`-- --name acme --ci=yes`); whatever is missing is asked interactively.

use crate::config::{InputSpec, InputType};
use crate::error::{Error, Result};
use crate::evaluator::Variables;
use crate::prompt::Prompter;
use indexmap::IndexMap;
use log::debug;

/// Parses a yes/no answer.
///
/// # Returns
/// * `Some(true)` for `y`, `yes`, `true`
/// * `Some(false)` for `n`, `no`, `false`
/// * `None` for anything else
pub fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

/// Checks a raw value against its input type and returns the value to store.
///
/// # Errors
/// * `Error::InputError` for an invalid yes/no answer or an unknown option
pub fn normalize(spec: &InputSpec, value: &str) -> Result<String> {
    match spec.input_type {
        InputType::Text => Ok(value.to_string()),
        InputType::YesNo => parse_yes_no(value).map(|b| b.to_string()).ok_or_else(|| {
            Error::InputError(format!("'{}' expects yes or no, got '{value}'", spec.id))
        }),
        InputType::Select => {
            if spec.options.iter().any(|option| option == value) {
                Ok(value.to_string())
            } else {
                Err(Error::InputError(format!(
                    "'{}' must be one of [{}], got '{value}'",
                    spec.id,
                    spec.options.join(", ")
                )))
            }
        }
    }
}

/// Parses `--id value` and `--id=value` pairs.
///
/// # Errors
/// * `Error::InputError` for unknown ids, missing values or stray arguments
pub fn parse_cli_args<S: AsRef<str>>(specs: &[InputSpec], args: &[S]) -> Result<Variables> {
    let specs: IndexMap<&str, &InputSpec> = specs.iter().map(|s| (s.id.as_str(), s)).collect();
    let mut values = Variables::new();
    let mut args = args.iter().map(AsRef::<str>::as_ref);

    while let Some(arg) = args.next() {
        let flag = arg
            .strip_prefix("--")
            .ok_or_else(|| Error::InputError(format!("unexpected argument '{arg}'")))?;
        let (id, value) = match flag.split_once('=') {
            Some((id, value)) => (id, value),
            None => {
                let value = args
                    .next()
                    .filter(|value| !value.starts_with("--"))
                    .ok_or_else(|| Error::InputError(format!("missing value for '--{flag}'")))?;
                (flag, value)
            }
        };
        let spec = specs
            .get(id)
            .ok_or_else(|| Error::InputError(format!("unknown input '{id}'")))?;
        values.insert(id.to_string(), normalize(spec, value)?);
    }

    Ok(values)
}

/// Asks a single input through `prompter`.
pub fn prompt_input(spec: &InputSpec, prompter: &dyn Prompter) -> Result<String> {
    let default = spec.default.as_deref();
    match spec.input_type {
        InputType::Text => prompter.text(&spec.text, default),
        InputType::YesNo => {
            let default = default.and_then(parse_yes_no).unwrap_or(false);
            prompter.confirm(&spec.text, default).map(|b| b.to_string())
        }
        InputType::Select => {
            let default = default
                .and_then(|d| spec.options.iter().position(|option| option == d))
                .unwrap_or(0);
            let index = prompter.select(&spec.text, &spec.options, default)?;
            spec.options
                .get(index)
                .cloned()
                .ok_or_else(|| Error::InputError(format!("invalid selection for '{}'", spec.id)))
        }
    }
}

/// Resolves every input, in declaration order. Command line values win,
/// the rest is prompted for.
pub fn collect_inputs<S: AsRef<str>>(
    specs: &[InputSpec],
    cli_args: &[S],
    prompter: &dyn Prompter,
) -> Result<Variables> {
    let mut provided = parse_cli_args(specs, cli_args)?;
    let mut values = Variables::new();

    for spec in specs {
        let value = match provided.shift_remove(&spec.id) {
            Some(value) => {
                debug!("Input '{}' provided on the command line", spec.id);
                value
            }
            None => prompt_input(spec, prompter)?,
        };
        values.insert(spec.id.clone(), value);
    }

    Ok(values)
}
