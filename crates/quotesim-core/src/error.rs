//! Error types for the quote simulator.
//!
//! The simulation engine itself is total over any well-typed [`Scenario`]
//! and never fails; these errors belong to the layers around it — input
//! parsing, scenario files, and export.
//!
//! [`Scenario`]: crate::types::Scenario

use thiserror::Error;

/// Top-level simulator error.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid scenario: {0}")]
    Scenario(String),

    #[error("Invalid price tick '{0}': expected comma-separated numbers")]
    ParseTick(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
