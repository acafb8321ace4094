//! Common constants used throughout flint.

/// Supported manifest file names, in lookup order.
pub const MANIFEST_FILES: [&str; 3] = ["template.json", "template.yaml", "template.yml"];

/// Directory holding the files copied into the destination.
pub const TEMPLATE_FILES_DIR: &str = "template";

/// Directory holding auxiliary files for hook scripts. Never copied.
pub const INCLUDE_DIR: &str = "include";

pub const PREHOOKS_DIR: &str = "prehooks";

pub const POSTHOOKS_DIR: &str = "posthooks";

/// Prefix of every environment variable flint reads or exports.
pub const ENV_PREFIX: &str = "FLINT_";

/// Exported to hook scripts with the destination root.
pub const OUTPUT_PATH_ENV: &str = "FLINT_OUTPUT_PATH";

/// Template home, relative to the user's home directory.
pub const DEFAULT_TEMPLATE_HOME: &str = ".flint/templates";
