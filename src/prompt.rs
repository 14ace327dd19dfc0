//! Interactive prompting for inputs missing from the command line.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, Select};

/// Asks the user for values.
pub trait Prompter {
    /// Free text answer.
    fn text(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Yes/no answer.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Index of the selected option.
    fn select(&self, prompt: &str, options: &[String], default: usize) -> Result<usize>;
}

/// Terminal prompter backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|e| Error::InputError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::InputError(e.to_string()))
    }

    fn select(&self, prompt: &str, options: &[String], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(options)
            .interact()
            .map_err(|e| Error::InputError(e.to_string()))
    }
}
