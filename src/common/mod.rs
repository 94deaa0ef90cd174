//! Shared numeric helpers.

pub mod ladder;
pub mod math;

pub use ladder::{Cmp, Ladder};
