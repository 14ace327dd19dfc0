//! archetype turns an existing project into a new one.
//! A YAML transformations file describes which files to drop, which marked
//! regions to keep and which text to replace; the source tree is rewritten
//! into a fresh destination accordingly.

/// Command-line interface module for the archetype application
pub mod cli;

/// Transformations file format and loading
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the archetype application
pub mod error;

/// Condition evaluation and templating over variables
pub mod evaluator;

/// In-memory file records
pub mod file;

/// Entry point of a generation run
pub mod generator;

/// Before and after hook operations
pub mod hooks;

/// Input values from the command line and prompts
pub mod inputs;

/// Logger setup for the binary
pub mod logger;

/// Glob patterns
pub mod pattern;

/// Source tree rewriting
pub mod processor;

/// User interaction
pub mod prompt;

/// The transformer set of a run
pub mod transformations;

/// Include and replace transformers
pub mod transformer;
