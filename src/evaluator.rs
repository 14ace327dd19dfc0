//! Condition evaluation and template rendering over a variable map.
//! Transformers and hook operations only see the [`Evaluator`] trait,
//! [`MiniJinjaEvaluator`] is the implementation used by the binary.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use minijinja::{Environment, UndefinedBehavior};

/// Variable name to value mapping available to conditions and templates.
pub type Variables = IndexMap<String, String>;

/// Trait for condition and template engines.
pub trait Evaluator {
    /// Evaluates a boolean condition against `vars`.
    ///
    /// # Errors
    /// * `Error::ConditionError` on a malformed expression or an unresolved variable
    fn evaluate_condition(&self, condition: &str, vars: &Variables) -> Result<bool>;

    /// Renders a template string against `vars`.
    ///
    /// # Errors
    /// * `Error::TemplateError` on malformed syntax or an unresolved variable
    fn render_template(&self, template: &str, vars: &Variables) -> Result<String>;
}

/// MiniJinja-based evaluator.
///
/// Conditions are MiniJinja expressions (`include_ci and name != "demo"`),
/// templates use `{{ name }}` syntax. Referencing an undefined variable is an
/// error in both.
pub struct MiniJinjaEvaluator {
    env: Environment<'static>,
}

impl MiniJinjaEvaluator {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaEvaluator {
    fn default() -> Self {
        MiniJinjaEvaluator::new()
    }
}

impl Evaluator for MiniJinjaEvaluator {
    fn evaluate_condition(&self, condition: &str, vars: &Variables) -> Result<bool> {
        let source = format!("{{% if {condition} %}}true{{% else %}}false{{% endif %}}");
        let rendered = self.env.render_str(&source, condition_context(vars)).map_err(|e| {
            Error::ConditionError { condition: condition.to_string(), reason: e.to_string() }
        })?;
        Ok(rendered == "true")
    }

    fn render_template(&self, template: &str, vars: &Variables) -> Result<String> {
        self.env.render_str(template, vars).map_err(|e| Error::TemplateError {
            template: template.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Context for conditions. `"true"` and `"false"` become booleans so yes/no
/// answers can be used as conditions directly. Templates get the raw strings.
fn condition_context(vars: &Variables) -> serde_json::Value {
    let context = vars
        .iter()
        .map(|(key, value)| {
            let value = if value.eq_ignore_ascii_case("true") {
                serde_json::Value::Bool(true)
            } else if value.eq_ignore_ascii_case("false") {
                serde_json::Value::Bool(false)
            } else {
                serde_json::Value::String(value.clone())
            };
            (key.clone(), value)
        })
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(context)
}
