//! Core application primitives

pub mod session;

pub use session::*;
