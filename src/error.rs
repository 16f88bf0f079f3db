//! Error handling for tfdoc.
//! Defines the error kinds a module load can end with and the result alias
//! used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading a module.
///
/// Extraction steps that only deal with optional documentation (header,
/// inline comments) never produce one of these; missing data is returned
/// as an empty value instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The module directory is missing or is not a directory
    #[error("Module path not found: {path}")]
    PathNotFound { path: String },

    /// The module source could not be parsed, or there was none to parse
    #[error("Failed to parse '{path}': {message}")]
    ParseError { path: String, message: String },

    /// The output values document is missing or is not valid JSON
    #[error("Output values error in '{path}': {message}")]
    ValuesFileError { path: String, message: String },

    /// Invalid options or a malformed config file
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
