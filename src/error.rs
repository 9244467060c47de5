//! Error handling for the nfogen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for nfogen operations.
///
/// Rendering errors are fatal: the engine never retries, substitutes
/// defaults, or produces partial output.
#[derive(Error, Debug)]
pub enum NfoError {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A placeholder or conditional block references a variable that is
    /// not present in the context
    #[error("Undefined variable: {name} is not present in the context.")]
    UndefinedVariable { name: String },

    /// A format spec matched neither the custom spec set nor the generic
    /// formatting grammar
    #[error("Invalid format spec: {spec:?}.")]
    InvalidFormatSpec { spec: String },

    /// A layout spec was given a sequence whose element count does not
    /// fill the requested grid
    #[error("Layout mismatch: grid needs {expected} items but got {actual}.")]
    LayoutCountMismatch { expected: usize, actual: usize },

    /// A format spec was applied to a value variant it does not accept
    #[error("Type mismatch: {spec} cannot be applied to {actual}.")]
    TypeMismatch { spec: &'static str, actual: &'static str },

    /// Represents malformed template syntax, e.g. an unclosed placeholder
    /// or a stray brace
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),
}

/// Convenience type alias for Results with NfoError as the error type.
pub type NfoResult<T> = Result<T, NfoError>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The NfoError to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: NfoError) {
    eprintln!("{}", err);
    std::process::exit(1);
}
