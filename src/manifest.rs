//! Template manifest handling.
//! A manifest declares the variables a template expects and the hook scripts
//! run around generation. Supports JSON and YAML formats
//! (template.json, template.yaml, template.yml).

use crate::constants::MANIFEST_FILES;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// A single variable declared by a template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Placeholder key, also the suffix of the `FLINT_<NAME>` environment variable.
    pub name: String,
    /// Text shown when prompting. Falls back to `name`.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
}

impl Variable {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), display_name: None, default_value: None }
    }

    pub fn with_display_name<S: Into<String>>(mut self, display_name: S) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_default<S: Into<String>>(mut self, default_value: S) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// The label used for interactive prompts.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// Manifest shape as it appears on disk. Every section is optional.
#[derive(Debug, Default, Deserialize)]
struct RawManifest {
    #[serde(default)]
    variables: Option<Vec<Variable>>,
    #[serde(default)]
    prehooks: Option<Vec<String>>,
    #[serde(default)]
    posthooks: Option<Vec<String>>,
}

/// The serialization formats a manifest file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
}

impl ManifestFormat {
    /// Picks the format from a manifest file name.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Decodes manifest content written in this format.
    pub fn parse(self, content: &str) -> std::result::Result<Manifest, String> {
        let raw: RawManifest = match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
            // An empty YAML document is a manifest with no sections.
            Self::Yaml if content.trim().is_empty() => RawManifest::default(),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
        };

        Manifest::new(
            raw.variables.unwrap_or_default(),
            raw.prehooks.unwrap_or_default(),
            raw.posthooks.unwrap_or_default(),
        )
    }
}

/// In-memory representation of a template manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    variables: IndexMap<String, Variable>,
    prehooks: Vec<String>,
    posthooks: Vec<String>,
}

impl Manifest {
    /// Builds a manifest, rejecting empty and duplicate variable names.
    pub fn new(
        variables: Vec<Variable>,
        prehooks: Vec<String>,
        posthooks: Vec<String>,
    ) -> std::result::Result<Self, String> {
        let mut indexed = IndexMap::with_capacity(variables.len());
        for variable in variables {
            if variable.name.is_empty() {
                return Err("variable name must not be empty".to_string());
            }
            if indexed.contains_key(&variable.name) {
                return Err(format!("variable '{}' is declared more than once", variable.name));
            }
            indexed.insert(variable.name.clone(), variable);
        }

        Ok(Self { variables: indexed, prehooks, posthooks })
    }

    /// Loads the manifest from a template root directory.
    ///
    /// The first existing file of [`MANIFEST_FILES`] wins; the others are not read.
    ///
    /// # Errors
    /// * `Error::ManifestNotFound` if no manifest file exists
    /// * `Error::ManifestMalformed` if the file cannot be decoded
    pub fn load<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let template_root = template_root.as_ref();

        for file_name in MANIFEST_FILES {
            let manifest_path = template_root.join(file_name);
            if !manifest_path.is_file() {
                continue;
            }

            debug!("Loading manifest from {}", manifest_path.display());
            let format = ManifestFormat::from_file_name(file_name).ok_or_else(|| {
                Error::ManifestMalformed {
                    path: manifest_path.display().to_string(),
                    reason: "unknown manifest format".to_string(),
                }
            })?;
            let content = std::fs::read_to_string(&manifest_path)?;

            return format.parse(&content).map_err(|reason| Error::ManifestMalformed {
                path: manifest_path.display().to_string(),
                reason,
            });
        }

        Err(Error::ManifestNotFound {
            template_dir: template_root.display().to_string(),
            manifest_files: MANIFEST_FILES.join(", "),
        })
    }

    /// Declared variables in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn prehooks(&self) -> &[String] {
        &self.prehooks
    }

    pub fn posthooks(&self) -> &[String] {
        &self.posthooks
    }
}
