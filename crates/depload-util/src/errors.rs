use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depload operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DeploadError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed module catalog.
    #[error("Catalog error: {message}")]
    #[diagnostic(help("Each [[assembly]] entry needs a unique name and version"))]
    Catalog { message: String },

    /// Invalid or malformed configuration file.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.depload/config.toml for syntax errors"))]
    Config { message: String },

    /// An assembly display name could not be parsed.
    #[error("Invalid assembly reference '{input}': {reason}")]
    InvalidReference { input: String, reason: String },

    /// A module requested by name is not part of the catalog.
    #[error("Module not found: {name}")]
    ModuleNotFound { name: String },

    /// A resolver failed to load a referenced module.
    #[error("Resolution failed: {message}")]
    Resolution { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DeploadResult<T> = miette::Result<T>;
