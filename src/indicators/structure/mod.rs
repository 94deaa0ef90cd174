//! Market structure: pivot support and resistance

pub mod pivots;

pub use pivots::*;
