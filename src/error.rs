//! Error handling for the archetype application.
//! Defines the error kinds raised while loading a transformations spec,
//! binding it to variables and rewriting a source tree.

use std::io;
use thiserror::Error;

/// Custom error types for archetype operations.
///
/// Every variant is fatal for a run: it aborts at the point of detection and
/// nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The transformations document is malformed or incomplete
    #[error("Failed to parse transformations spec: {0}.")]
    SpecParseError(String),

    /// A glob pattern could not be compiled
    #[error("Invalid file pattern '{pattern}': {source}.")]
    PatternCompileError {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// A condition expression is malformed or could not be evaluated
    #[error("Failed to evaluate condition '{condition}': {reason}.")]
    ConditionError { condition: String, reason: String },

    /// A template is malformed or could not be rendered
    #[error("Failed to render template '{template}': {reason}.")]
    TemplateError { template: String, reason: String },

    /// The destination exists and is not an empty directory
    #[error("Destination '{destination}' is not empty, aborting.")]
    DestinationNotEmptyError { destination: String },

    /// A source file could not be read
    #[error("Failed to read '{path}': {source}.")]
    ReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An output file could not be written
    #[error("Failed to write '{path}': {source}.")]
    WriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A before/after operation failed
    #[error("Hook '{command}' failed: {reason}.")]
    HookExecutionError { command: String, reason: String },

    /// User supplied inputs are invalid or could not be collected
    #[error("Input error: {0}.")]
    InputError(String),

    /// A transformer was applied before its condition or template was bound
    #[error("Transformer '{0}' was used before being bound to variables.")]
    UnboundTransformerError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
