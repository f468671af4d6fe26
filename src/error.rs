//! Error type for configuration validation
//!
//! The simulation core is pure in-memory computation, so the taxonomy is
//! narrow: invalid configuration is rejected (never clamped) at spawn or
//! parameter-validation time, and the remaining variants only exist for the
//! driver binary's params-file path.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid spawn argument or simulation parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Failed to read a params file (driver only).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to parse a params file (driver only).
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
