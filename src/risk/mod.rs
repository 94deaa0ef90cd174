//! Risk scoring and pre-trade guard rails.

pub mod limits;
pub mod scorer;

pub use limits::{SafetyCheck, TradeExposure};
pub use scorer::RiskScorer;
