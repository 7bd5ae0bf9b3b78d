//! Error types for root loggers

use thiserror::Error;

/// Errors that can occur when forwarding to a root logger
#[derive(Debug, Error)]
pub enum Error {
    /// The root logger does not provide the requested operation
    #[error("root logger does not support `{0}`")]
    MissingCapability(&'static str),

    /// The level is not declared by the logger's level set
    #[error("undeclared log level: {0}")]
    UndeclaredLevel(String),

    /// Error raised by the root logger implementation itself
    #[error(transparent)]
    Root(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
