//! Generation orchestration: prehooks, the template tree walk, posthooks.

use std::path::PathBuf;

use log::{debug, warn};
use walkdir::WalkDir;

use crate::conflict::{resolve_conflict, ConflictDecision};
use crate::error::{Error, Result};
use crate::hooks::{run_hooks, ScriptExecutor};
use crate::ioutils::{copy_file, copy_permissions, create_dir_all, write_file};
use crate::processor::{FileOperation, Processor};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::resolver::InputMap;
use crate::template::Template;

/// State shared by the tree walk and the hooks of one run.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub output_root: PathBuf,
    /// Overwrite existing files without asking
    pub force: bool,
    pub inputs: InputMap,
}

/// Summary of a completed run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: usize,
    pub skipped: usize,
    pub directories: usize,
}

/// Drives a generation run.
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
    prompter: &'a dyn Prompter,
    executor: &'a dyn ScriptExecutor,
}

impl<'a> Generator<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        prompter: &'a dyn Prompter,
        executor: &'a dyn ScriptExecutor,
    ) -> Self {
        Self { renderer, prompter, executor }
    }

    /// Materializes `template` into `context.output_root`.
    ///
    /// # Flow
    /// 1. Runs prehooks
    /// 2. Walks `template/` in file name order, writing every entry
    /// 3. Runs posthooks
    ///
    /// # Errors
    /// Stops at the first write failure, unreadable template entry or
    /// aborted conflict. Files already written stay in place.
    pub fn generate(&self, template: &Template, context: &GenerationContext) -> Result<GenerationReport> {
        debug!("Executing prehooks");
        run_hooks(
            template.manifest.prehooks(),
            &template.prehooks_dir,
            &template.root,
            context,
            self.executor,
        );

        let report = self.materialize(template, context)?;

        debug!("Executing posthooks");
        run_hooks(
            template.manifest.posthooks(),
            &template.posthooks_dir,
            &template.root,
            context,
            self.executor,
        );

        Ok(report)
    }

    fn materialize(&self, template: &Template, context: &GenerationContext) -> Result<GenerationReport> {
        let processor = Processor::new(
            self.renderer,
            &template.files_dir,
            &context.output_root,
            &context.inputs,
        );
        let mut report = GenerationReport::default();

        for dir_entry in WalkDir::new(&template.files_dir).min_depth(1).sort_by_file_name() {
            let dir_entry = dir_entry.map_err(std::io::Error::from)?;
            let source = dir_entry.path();
            debug!("Processing {}", source.display());

            let operation = match processor.process(source) {
                Ok(operation) => operation,
                Err(e @ Error::ProcessError { .. }) => {
                    warn!("{}", e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let (target, content) = match &operation {
                FileOperation::CreateDirectory { target } => {
                    create_dir_all(target)?;
                    report.directories += 1;
                    continue;
                }
                FileOperation::Write { target, content } => (target, Some(content)),
                FileOperation::Copy { target } => (target, None),
            };

            match resolve_conflict(target, context.force, self.prompter) {
                ConflictDecision::Abort => {
                    return Err(Error::GenerationAborted { path: target.display().to_string() })
                }
                ConflictDecision::Skip => {
                    println!("Skipping '{}'", target.display());
                    report.skipped += 1;
                    continue;
                }
                ConflictDecision::Overwrite => {}
            }

            // Read-only destinations cannot be written in place.
            if target.is_file() {
                std::fs::remove_file(target)?;
            }
            match content {
                Some(content) => {
                    write_file(content, target)?;
                    copy_permissions(source, target)?;
                }
                None => copy_file(source, target)?,
            }
            println!("Writing '{}'", target.display());
            report.written += 1;
        }

        Ok(report)
    }
}
