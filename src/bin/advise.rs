//! Tradewise advisory CLI
//!
//! Reads a JSON market input file, runs the equity advisory and the options
//! advisor, and prints both as JSON on stdout.
//!
//! Usage: advise <input.json>

use serde::Serialize;
use std::env;
use tradewise::config::{get_environment, EngineConfig};
use tradewise::core::session::MarketSession;
use tradewise::logging::init_logging;
use tradewise::options::{OptionsAdvice, OptionsAdvisor};
use tradewise::risk::{SafetyCheck, TradeExposure};
use tradewise::services::market_data::{MarketDataProvider, MarketInput, StaticMarketData};
use tradewise::signals::{Advisory, AdvisoryEngine};
use tracing::info;

#[derive(Serialize)]
struct Report<'a> {
    symbol: &'a str,
    session: MarketSession,
    advisory: Advisory,
    options: OptionsAdvice,
    /// Limits check for one lot of the top-ranked strategy on a fresh book.
    top_strategy_safety: Option<SafetyCheck>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let path = env::args()
        .nth(1)
        .ok_or("usage: advise <input.json>")?;

    let config = EngineConfig::from_env()?;
    info!(environment = %get_environment(), input = %path, "advise: starting");

    let input = MarketInput::from_json_file(&path)?;
    let symbol = input.symbol.clone();
    let provider = StaticMarketData::new(input);

    let snapshot = provider.snapshot(&symbol)?;
    let vix = provider.volatility()?;
    let session = MarketSession::at_utc(snapshot.timestamp(), &config.session);

    let advisory = AdvisoryEngine::new(config.clone()).advise_from(&provider, &symbol)?;
    let options = OptionsAdvisor::new(config.options.clone()).recommend(&snapshot, vix.as_ref())?;

    let top_strategy_safety = options.strategies.first().map(|top| {
        config.limits.check(&TradeExposure {
            trade_risk: top.setup.max_loss.unwrap_or(f64::INFINITY),
            daily_pnl: 0.0,
            open_positions: 0,
            lots: 1,
            market_open: session.is_open(),
        })
    });

    let report = Report {
        symbol: &symbol,
        session,
        advisory,
        options,
        top_strategy_safety,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
