//! Variable value resolution.
//! Merges values from the environment, an input file, inline `KEY:VALUE`
//! assignments and interactive prompts, later sources overriding earlier ones.

use crate::constants::ENV_PREFIX;
use crate::error::{Error, Result};
use crate::manifest::{Manifest, Variable};
use crate::prompt::Prompter;
use indexmap::IndexMap;
use log::{debug, warn};
use std::path::Path;

/// Final variable values of one run, in manifest declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputMap(IndexMap<String, String>);

impl InputMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `FLINT_<NAME>` pairs for every value, as exported to hook scripts.
    pub fn env_vars(&self) -> impl Iterator<Item = (String, &str)> {
        self.0.iter().map(|(k, v)| (env_var_name(k), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Environment variable name carrying the value of `variable_name`.
///
/// ```
/// assert_eq!(flint::resolver::env_var_name("project name"), "FLINT_project_name");
/// ```
pub fn env_var_name(variable_name: &str) -> String {
    format!("{}{}", ENV_PREFIX, variable_name.replace(' ', "_"))
}

/// Supported input file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Reads a flat name-to-value mapping from a JSON or YAML file.
///
/// # Errors
/// * `Error::UnsupportedInputFormat` for any other extension
/// * `Error::IoError` if the file cannot be read
/// * `Error::InputFileMalformed` if it is not a flat mapping of scalars
pub fn read_input_file(path: &Path) -> Result<IndexMap<String, String>> {
    let format = InputFormat::from_path(path)
        .ok_or_else(|| Error::UnsupportedInputFormat { path: path.display().to_string() })?;
    let content = std::fs::read_to_string(path)?;

    let malformed = |reason: String| Error::InputFileMalformed {
        path: path.display().to_string(),
        reason,
    };

    let raw: IndexMap<String, serde_json::Value> = match format {
        InputFormat::Json => serde_json::from_str(&content).map_err(|e| malformed(e.to_string()))?,
        InputFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| malformed(e.to_string()))?,
    };

    raw.into_iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(s) => Ok((key, s)),
            serde_json::Value::Number(n) => Ok((key, n.to_string())),
            serde_json::Value::Bool(b) => Ok((key, b.to_string())),
            _ => Err(malformed(format!("value of '{}' is not a string", key))),
        })
        .collect()
}

/// Splits an inline `KEY:VALUE` token on its first colon.
pub fn parse_assignment(token: &str) -> Option<(&str, &str)> {
    token.split_once(':')
}

/// Prompt text for a variable: its label, followed by the default if any.
pub fn prompt_text(variable: &Variable) -> String {
    match &variable.default_value {
        Some(default) => format!("{} ({})", variable.label(), default),
        None => variable.label().to_string(),
    }
}

/// Resolves a value for every variable declared in `manifest`.
///
/// # Arguments
/// * `manifest` - Declared variables; values for anything else are dropped
/// * `env_lookup` - Environment accessor, consulted for `FLINT_<NAME>`
/// * `input_file` - Optional JSON/YAML file with a flat mapping
/// * `inline` - `KEY:VALUE` tokens, highest precedence
/// * `prompter` - Asked once for every variable still unresolved
///
/// # Returns
/// * `Result<InputMap>` - Exactly one value per declared variable
pub fn resolve<E>(
    manifest: &Manifest,
    env_lookup: E,
    input_file: Option<&Path>,
    inline: &[String],
    prompter: &dyn Prompter,
) -> Result<InputMap>
where
    E: Fn(&str) -> Option<String>,
{
    let mut resolved: IndexMap<String, String> = IndexMap::new();

    for variable in manifest.variables() {
        if let Some(value) = env_lookup(&env_var_name(&variable.name)) {
            debug!("'{}' resolved from environment", variable.name);
            resolved.insert(variable.name.clone(), value);
        }
    }

    if let Some(path) = input_file {
        for (key, value) in read_input_file(path)? {
            if manifest.declares(&key) {
                debug!("'{}' resolved from {}", key, path.display());
                resolved.insert(key, value);
            }
        }
    }

    for token in inline {
        match parse_assignment(token) {
            Some((key, value)) if manifest.declares(key) => {
                resolved.insert(key.to_string(), value.to_string());
            }
            Some((key, _)) => {
                warn!("Variable {} is not defined in the template manifest.", key)
            }
            None => warn!("Invalid variable format: {}. Expected KEY:VALUE.", token),
        }
    }

    let mut inputs = IndexMap::with_capacity(resolved.len());
    for variable in manifest.variables() {
        let value = match resolved.swap_remove(&variable.name) {
            Some(value) => value,
            None => ask(variable, prompter),
        };
        inputs.insert(variable.name.clone(), value);
    }

    Ok(InputMap(inputs))
}

fn ask(variable: &Variable, prompter: &dyn Prompter) -> String {
    let default = variable.default_value.clone().unwrap_or_default();
    match prompter.ask_variable(&prompt_text(variable)) {
        Some(answer) if !answer.is_empty() => answer,
        Some(_) => default,
        None => {
            warn!("Cannot read a value for '{}', using the default", variable.name);
            default
        }
    }
}
