//! # error
//!
//! Crate-wide error type.
//!
//! Indicator, risk and signal scoring never fail for data-shape reasons; they
//! substitute documented defaults instead. Only option pricing, strategy
//! synthesis and snapshot construction reject their input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A numeric argument lies outside the domain of the calculation
    /// (non-positive price, volatility or time to expiry).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A quote could not be turned into a market snapshot.
    #[error("Invalid market snapshot: {0}")]
    InvalidSnapshot(String),

    /// An environment override could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
