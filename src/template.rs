//! Template sources and the on-disk template layout.

use crate::constants::{INCLUDE_DIR, POSTHOOKS_DIR, PREHOOKS_DIR, TEMPLATE_FILES_DIR};
use crate::error::{Error, Result};
use crate::home::TemplateHome;
use crate::manifest::Manifest;
use log::warn;
use std::path::{Path, PathBuf};

/// Where a template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A template stored in the template home, addressed by name
    Named(String),
    /// A template directory on the local filesystem
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Named(name) => write!(f, "stored template: '{name}'"),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

impl TemplateSource {
    /// Picks a source from the command line operands.
    ///
    /// A template name takes precedence over an explicit path; the ignored
    /// path is reported as a warning.
    pub fn from_args(name: Option<&str>, path: Option<&Path>) -> Result<Self> {
        match (name, path) {
            (Some(name), path) => {
                if let Some(path) = path {
                    warn!("Ignoring template path '{}'", path.display());
                }
                Ok(Self::Named(name.to_string()))
            }
            (None, Some(path)) => Ok(Self::FileSystem(path.to_path_buf())),
            (None, None) => Err(Error::TemplateNotSpecified),
        }
    }

    /// Resolves the source to a template root directory.
    pub fn resolve(&self, home: &TemplateHome) -> Result<PathBuf> {
        let root = match self {
            TemplateSource::Named(name) => home.template_path(name),
            TemplateSource::FileSystem(path) => path.clone(),
        };

        if !root.is_dir() {
            return Err(Error::TemplateDoesNotExist {
                template_dir: root.display().to_string(),
            });
        }
        Ok(root)
    }
}

/// A template root with its manifest loaded.
///
/// Nothing under the template root is ever written to.
#[derive(Debug, Clone)]
pub struct Template {
    pub manifest: Manifest,
    pub root: PathBuf,
    /// Files copied into the destination
    pub files_dir: PathBuf,
    /// Auxiliary files available to hooks, never copied
    pub include_dir: PathBuf,
    pub prehooks_dir: PathBuf,
    pub posthooks_dir: PathBuf,
}

impl Template {
    /// Opens the template at `root`, made absolute against the current
    /// directory. Hook scripts run with the root as their working directory,
    /// so every derived path must stay valid from there.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = std::path::absolute(root.as_ref())?;
        let manifest = Manifest::load(&root)?;

        Ok(Self {
            manifest,
            files_dir: root.join(TEMPLATE_FILES_DIR),
            include_dir: root.join(INCLUDE_DIR),
            prehooks_dir: root.join(PREHOOKS_DIR),
            posthooks_dir: root.join(POSTHOOKS_DIR),
            root,
        })
    }
}
