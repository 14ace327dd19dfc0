//! Command-line interface implementation for archetype.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_TRANSFORMATIONS_FILE;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for archetype.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "archetype: generate a project from an existing one using declarative transformations",
    long_about = None,
    after_help = "Inputs can be given after '--', e.g. '-- --name my-app --include_ci yes'."
)]
pub struct Args {
    /// Path to the transformations file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_TRANSFORMATIONS_FILE)]
    pub transformations: PathBuf,

    /// Directory to transform
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub source: PathBuf,

    /// Directory where the result is written, must be missing or empty
    #[arg(short, long, value_name = "DIR")]
    pub destination: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Input values, as '--<id> <value>' or '--<id>=<value>'
    #[arg(last = true, value_name = "INPUTS")]
    pub inputs: Vec<String>,
}

/// Command used to print the short help shown when a required argument is missing.
pub fn help_command() -> clap::Command {
    Args::command().help_template(
        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
    )
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                // The logger is not initialized yet.
                if let Err(err) = help_command().print_help() {
                    eprintln!("{e}\nFailed to print help: {err}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
