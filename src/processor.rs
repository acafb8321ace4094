//! Per-entry processing of the template tree.
//! Maps one template entry to the file operation that materializes it.

use crate::error::{Error, Result};
use crate::ioutils::read_text;
use crate::renderer::TemplateRenderer;
use crate::resolver::InputMap;
use log::debug;
use std::path::{Component, Path, PathBuf};

/// What has to happen in the destination for one template entry.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    CreateDirectory { target: PathBuf },
    /// Text file with placeholders substituted
    Write { target: PathBuf, content: String },
    /// Non-text file, copied as-is
    Copy { target: PathBuf },
}

/// Checks that a rendered relative path stays inside the destination.
///
/// Rejects empty paths, absolute paths, empty segments and anything other
/// than plain names (`.` and `..` included).
pub fn is_rendered_path_valid(rendered: &str) -> bool {
    if rendered.is_empty() || rendered.split(['/', std::path::MAIN_SEPARATOR]).any(str::is_empty) {
        return false;
    }
    Path::new(rendered).components().all(|c| matches!(c, Component::Normal(_)))
}

pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    files_dir: &'a Path,
    output_root: &'a Path,
    inputs: &'a InputMap,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        files_dir: &'a Path,
        output_root: &'a Path,
        inputs: &'a InputMap,
    ) -> Self {
        Self { renderer, files_dir, output_root, inputs }
    }

    fn process_error(source: &Path, e: impl ToString) -> Error {
        Error::ProcessError { source_path: source.display().to_string(), e: e.to_string() }
    }

    /// Destination path of a template entry, with placeholders substituted.
    pub fn target_path(&self, source: &Path) -> Result<PathBuf> {
        let relative = source
            .strip_prefix(self.files_dir)
            .map_err(|e| Self::process_error(source, e))?;
        let relative = relative
            .to_str()
            .ok_or_else(|| Self::process_error(source, "path is not valid UTF-8"))?;

        let rendered = self.renderer.render(relative, self.inputs);
        debug!("Processed target path: {}", rendered);

        if !is_rendered_path_valid(&rendered) {
            return Err(Self::process_error(
                source,
                format!("rendered path '{}' is not a valid relative path", rendered),
            ));
        }
        Ok(self.output_root.join(rendered))
    }

    /// Works out the operation for the template entry at `source`.
    ///
    /// # Errors
    /// * `Error::ProcessError` if the entry's path cannot be rendered to a
    ///   valid destination; the entry should be skipped
    /// * `Error::IoError` if the entry cannot be read
    pub fn process(&self, source: &Path) -> Result<FileOperation> {
        let target = self.target_path(source)?;

        if source.is_dir() {
            return Ok(FileOperation::CreateDirectory { target });
        }

        match read_text(source)? {
            Some(text) => {
                let content = self.renderer.render(&text, self.inputs);
                Ok(FileOperation::Write { target, content })
            }
            None => Ok(FileOperation::Copy { target }),
        }
    }
}
