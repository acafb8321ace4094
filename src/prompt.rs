//! User input and interaction handling.
//! All terminal interaction goes through [`Prompter`], so resolution and
//! conflict logic can run against canned answers.

use dialoguer::Input;
use log::debug;
use std::path::Path;

/// Source of interactive answers.
///
/// Every method returns `None` when no answer could be read (closed stdin,
/// no terminal); callers decide what that means.
pub trait Prompter {
    /// Asks for a variable value. `prompt` already carries the default, if any.
    fn ask_variable(&self, prompt: &str) -> Option<String>;

    /// Asks what to do with an existing destination file.
    fn ask_conflict(&self, path: &Path) -> Option<String>;

    fn ask_output_path(&self) -> Option<String>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn read(prompt: String) -> Option<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| debug!("Cannot read input: {}", e))
            .ok()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_variable(&self, prompt: &str) -> Option<String> {
        Self::read(prompt.to_string())
    }

    fn ask_conflict(&self, path: &Path) -> Option<String> {
        Self::read(format!(
            "File already exists at {}\noverride(o), skip(s), abort(a)",
            path.display()
        ))
    }

    fn ask_output_path(&self) -> Option<String> {
        Self::read("Output Path [--output | -o]".to_string())
    }
}
