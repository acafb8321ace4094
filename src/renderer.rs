//! Placeholder substitution for template paths and file contents.
//!
//! A placeholder is a double-brace token naming a variable, such as
//! `{{project}}` or `{{ project }}`. Tokens naming a variable that is not in
//! the [`InputMap`] are left untouched, and output is never scanned again, so
//! a value that looks like a placeholder is inserted literally.
use crate::resolver::InputMap;
use regex::{Captures, Regex};

/// Trait for placeholder rendering engines.
pub trait TemplateRenderer {
    /// Renders `template` with the resolved values in `inputs`.
    fn render(&self, template: &str, inputs: &InputMap) -> String;
}

/// Regex-based `{{name}}` renderer.
pub struct PlaceholderRenderer {
    pattern: Regex,
}

impl PlaceholderRenderer {
    pub fn new() -> Self {
        // The pattern is a literal and always compiles.
        let pattern = Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").unwrap();
        Self { pattern }
    }
}

impl Default for PlaceholderRenderer {
    fn default() -> Self {
        PlaceholderRenderer::new()
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, inputs: &InputMap) -> String {
        self.pattern
            .replace_all(template, |caps: &Captures| match inputs.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
