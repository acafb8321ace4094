//! Error handling for flint.
//! Defines the error type and result alias used throughout the crate.

use thiserror::Error;

/// Every fatal condition a flint run can end with.
///
/// Non-fatal conditions (missing hooks, bad inline tokens and the like) are
/// never represented here; they are logged and the run continues.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("No manifest file found in '{template_dir}'. Tried: {manifest_files}.")]
    ManifestNotFound { template_dir: String, manifest_files: String },

    #[error("Cannot decode manifest '{path}': {reason}.")]
    ManifestMalformed { path: String, reason: String },

    #[error("Cannot read input file '{path}': unsupported format (expected .json, .yaml or .yml).")]
    UnsupportedInputFormat { path: String },

    #[error("Cannot decode input file '{path}': {reason}.")]
    InputFileMalformed { path: String, reason: String },

    #[error("Cannot proceed: template not specified. Pass a template name or --template.")]
    TemplateNotSpecified,

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExist { template_dir: String },

    #[error("Cannot proceed: template '{name}' already exists at '{path}'. Use --force to overwrite it.")]
    TemplateAlreadyExists { name: String, path: String },

    #[error("Cannot proceed: output path not specified.")]
    OutputPathNotSpecified,

    /// The user chose to abort at a conflict prompt.
    #[error("Generation aborted at '{path}'.")]
    GenerationAborted { path: String },

    /// A single template entry could not be processed. Reported as a warning.
    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },
}

/// Convenience type alias for Results with flint's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
