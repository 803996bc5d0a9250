//! Error types for camconf.

use thiserror::Error;

/// The main error type for camconf operations.
///
/// Projection mutators never produce these: out-of-range input is clamped.
/// Errors only come from the edges of the system (collaborator wiring,
/// control-name parsing, and options files).
#[derive(Error, Debug)]
pub enum CamconfError {
    /// A required collaborator was not provided at initialization.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(String),

    /// A control name did not match any known control.
    #[error("unknown control '{0}'")]
    UnknownControl(String),

    /// Options failed validation.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for camconf operations.
pub type Result<T> = std::result::Result<T, CamconfError>;
