//! Error handling for the Lathe application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Lathe operations.
///
/// This enum represents all possible errors that can occur within the Lathe application.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A relative project path with more segments than the resolver understands
    #[error("Unknown directory shape: '{input}'.")]
    UnsupportedPathShape { input: String },

    /// Represents errors in process-wide configuration (workspace root, domain)
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors raised by the minijinja engine while rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors in the template registry (unknown template id)
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents validation failures in user input or derived data
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
