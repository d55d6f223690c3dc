use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all droidspec operations.
///
/// Every fatal condition aborts before the descriptor is handed to the
/// external orchestrator; there is no partial or best-effort handoff.
#[derive(Debug, Error, Diagnostic)]
pub enum DescriptorError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The declarative source is malformed (TOML syntax).
    #[error("Syntax error: {message}")]
    #[diagnostic(help("Check your Android.toml for syntax errors"))]
    Syntax { message: String },

    /// A required descriptor attribute is absent.
    #[error("Missing required field `{field}`")]
    #[diagnostic(help("Declare `{field}` in Android.toml"))]
    MissingField { field: String },

    /// An ordering or enumeration constraint is violated.
    #[error("Invalid value for `{field}`: {reason}")]
    Constraint { field: String, reason: String },

    /// Ambient toolchain discovery or configuration failed.
    #[error("Toolchain error: {message}")]
    Toolchain { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
