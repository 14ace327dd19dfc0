//! Before and after hook operations.
//! Each operation is a shell command run with `sh -c`; commands may reference
//! variables (`cd {{ destination }} && git init`) and are rendered when the
//! transformations are bound.

use crate::config::OperationsSpec;
use crate::error::{Error, Result};
use crate::evaluator::{Evaluator, Variables};
use log::{debug, info};
use std::process::{Command, Stdio};

/// A single shell command.
#[derive(Debug, Clone)]
pub struct Operation {
    template: String,
    command: Option<String>,
}

impl Operation {
    pub fn new<S: Into<String>>(template: S) -> Self {
        Self { template: template.into(), command: None }
    }

    /// Builds the operations of a `before`/`after` section, in declaration order.
    pub fn from_spec(spec: &OperationsSpec) -> Vec<Self> {
        spec.operations.iter().flat_map(|op| op.sh.iter()).map(Self::new).collect()
    }

    /// The command to execute: rendered once bound, the raw template before.
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or(&self.template)
    }

    pub fn bind(&mut self, evaluator: &dyn Evaluator, vars: &Variables) -> Result<()> {
        self.command = Some(evaluator.render_template(&self.template, vars)?);
        Ok(())
    }

    /// Runs the command, inheriting stdout and stderr.
    ///
    /// # Errors
    /// * `Error::HookExecutionError` if the command cannot be spawned or exits unsuccessfully
    pub fn execute(&self) -> Result<()> {
        let command = self.command();
        info!("Running '{command}'");

        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::HookExecutionError {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::HookExecutionError {
                command: command.to_string(),
                reason: format!("exited with {status}"),
            });
        }
        Ok(())
    }
}

/// Executes `operations` in order, stopping at the first failure.
pub fn run_operations(operations: &[Operation]) -> Result<()> {
    debug!("Running {} operation(s)", operations.len());
    for operation in operations {
        operation.execute()?;
    }
    Ok(())
}
