//! Technical indicators computed from historical price bars.

pub mod engine;
pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use engine::IndicatorEngine;
