//! Tracing setup for the advisor binary.
//!
//! Production environments emit JSON lines, anything else a compact coloured
//! format. Both write to stderr so stdout carries only the report.

use crate::config::get_environment;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn for_environment(env: &str) -> Self {
        match env {
            "production" | "prod" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the `info` default.
pub fn init_logging() {
    let format = LogFormat::for_environment(&get_environment());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_ansi(true).with_writer(io::stderr))
            .init(),
    }
}
