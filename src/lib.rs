//! Market advisory engine for index trading: technical indicators, a
//! composite risk score, a signal score with a buy/sell/hold decision, and
//! ranked options strategies priced with Black-Scholes.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod options;
pub mod risk;
pub mod services;
pub mod signals;

pub use error::{EngineError, EngineResult};
