//! Trend indicators

pub mod sma;

pub use sma::*;
