//! The template home: a directory of templates addressable by name.

use crate::constants::DEFAULT_TEMPLATE_HOME;
use crate::error::{Error, Result};
use crate::ioutils::{copy_file, create_dir_all};
use crate::template::Template;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Storage root for named templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateHome {
    root: PathBuf,
}

impl TemplateHome {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// `$HOME/.flint/templates`, if `HOME` is set.
    pub fn from_user_home() -> Option<Self> {
        std::env::var_os("HOME").map(|home| Self::new(PathBuf::from(home).join(DEFAULT_TEMPLATE_HOME)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn template_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Copies a local template directory into the home.
    ///
    /// # Arguments
    /// * `source` - Template root to copy; must contain a loadable manifest
    /// * `name` - Stored name, defaults to the source directory name
    /// * `force` - Replace a template already stored under that name
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the stored template
    pub fn add<P: AsRef<Path>>(&self, source: P, name: Option<&str>, force: bool) -> Result<PathBuf> {
        let source = source.as_ref();
        if !source.is_dir() {
            return Err(Error::TemplateDoesNotExist {
                template_dir: source.display().to_string(),
            });
        }
        let source = source.canonicalize()?;
        Template::open(&source)?;

        let name = match name {
            Some(name) => name.to_string(),
            None => source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| Error::TemplateDoesNotExist {
                    template_dir: source.display().to_string(),
                })?,
        };

        let target = self.template_path(&name);
        if target.exists() {
            if !force {
                return Err(Error::TemplateAlreadyExists {
                    name,
                    path: target.display().to_string(),
                });
            }
            debug!("Removing existing template at {}", target.display());
            std::fs::remove_dir_all(&target)?;
        }

        for entry in WalkDir::new(&source).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            // Every entry of the walk lives under its root.
            let relative = entry.path().strip_prefix(&source).map_err(std::io::Error::other)?;
            let dest = target.join(relative);
            if entry.file_type().is_dir() {
                create_dir_all(&dest)?;
            } else {
                copy_file(entry.path(), &dest)?;
            }
        }

        Ok(target)
    }

    /// Names of stored templates, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
