//! Volatility indicators: Bollinger Bands, ATR, historical volatility

pub mod atr;
pub mod bollinger;
pub mod historical;

pub use atr::*;
pub use bollinger::*;
pub use historical::*;
