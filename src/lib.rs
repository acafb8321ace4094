//! flint generates projects and files from templates.
//! A template holds a manifest of variables and hook scripts plus a tree of
//! files whose paths and contents carry `{{variable}}` placeholders.

/// Command-line interface and command dispatch
pub mod cli;

/// Destination conflict handling
pub mod conflict;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Generation orchestration
pub mod generator;

/// Template home: templates stored by name
pub mod home;

/// Pre and post generation hook processing
/// Handles execution of the scripts listed in the manifest from:
/// - prehooks/
/// - posthooks/
pub mod hooks;

/// A set of helpers for working with the file system
pub mod ioutils;

/// Logger setup
pub mod logger;

/// Manifest handling
/// Supports JSON and YAML formats (template.json, template.yaml, template.yml)
pub mod manifest;

/// Per-entry template tree processing
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Placeholder substitution
pub mod renderer;

/// Variable value resolution
pub mod resolver;

/// Template sources and layout
pub mod template;
