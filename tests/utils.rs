#![allow(dead_code)]

use flint::prompt::Prompter;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// Prompter answering from canned queues. An exhausted queue reads as `None`.
#[derive(Default)]
pub struct ScriptedPrompter {
    variable_answers: RefCell<VecDeque<Option<String>>>,
    conflict_answers: RefCell<VecDeque<Option<String>>>,
    output_path: Option<String>,
    pub variable_prompts: RefCell<Vec<String>>,
    pub conflict_prompts: RefCell<Vec<PathBuf>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variables(self, answers: &[Option<&str>]) -> Self {
        self.variable_answers
            .borrow_mut()
            .extend(answers.iter().map(|a| a.map(str::to_string)));
        self
    }

    pub fn with_conflicts(self, answers: &[&str]) -> Self {
        self.conflict_answers
            .borrow_mut()
            .extend(answers.iter().map(|a| Some(a.to_string())));
        self
    }

    pub fn with_output_path(mut self, path: &str) -> Self {
        self.output_path = Some(path.to_string());
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_variable(&self, prompt: &str) -> Option<String> {
        self.variable_prompts.borrow_mut().push(prompt.to_string());
        self.variable_answers.borrow_mut().pop_front().flatten()
    }

    fn ask_conflict(&self, path: &Path) -> Option<String> {
        self.conflict_prompts.borrow_mut().push(path.to_path_buf());
        self.conflict_answers.borrow_mut().pop_front().flatten()
    }

    fn ask_output_path(&self) -> Option<String> {
        self.output_path.clone()
    }
}

/// Writes a file, creating its parent directories.
pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Creates a template at `root` with a `template.json` manifest and the
/// given files under `template/`.
pub fn create_template(root: &Path, manifest: &str, files: &[(&str, &str)]) {
    write(&root.join("template.json"), manifest);
    fs::create_dir_all(root.join("template")).unwrap();
    for (path, content) in files {
        write(&root.join("template").join(path), content);
    }
}
