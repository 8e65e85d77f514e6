//! Error types for the Dynaxis core library.

use thiserror::Error;

/// Core error type for dynamic axis resolution.
#[derive(Error, Debug)]
pub enum DynaxisError {
    #[error("Axis value source '{variable}' was never populated")]
    MissingSource { variable: String },

    #[error("Unterminated quote in axis values: {raw}")]
    UnterminatedQuote { raw: String },

    #[error("Invalid axis definition: {0}")]
    InvalidAxis(String),
}

/// Result type alias for Dynaxis operations.
pub type Result<T> = std::result::Result<T, DynaxisError>;
