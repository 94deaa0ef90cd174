//! Market data provider interface.
//!
//! Network retrieval lives outside the engine; a provider only has to hand
//! over a snapshot and, when it has them, history and a volatility reading.

use crate::error::{EngineError, EngineResult};
use crate::models::market::{HistoricalSeries, MarketSnapshot, Quote, RawBar, VolatilityReading};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub trait MarketDataProvider {
    /// Current session snapshot for a symbol.
    fn snapshot(&self, symbol: &str) -> EngineResult<MarketSnapshot>;

    /// Up to `limit` most recent bars, `None` when the source has no history.
    fn history(&self, symbol: &str, limit: usize) -> EngineResult<Option<HistoricalSeries>>;

    /// Latest volatility index reading, `None` when unavailable.
    fn volatility(&self) -> EngineResult<Option<VolatilityReading>>;
}

/// Everything one advisory cycle needs, in the shape a fetch job writes to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInput {
    pub symbol: String,
    pub quote: Quote,
    #[serde(default)]
    pub history: Option<Vec<RawBar>>,
    #[serde(default)]
    pub vix: Option<VolatilityReading>,
}

impl MarketInput {
    pub fn from_json_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Provider backed by a single pre-fetched [`MarketInput`].
pub struct StaticMarketData {
    input: MarketInput,
}

impl StaticMarketData {
    pub fn new(input: MarketInput) -> Self {
        Self { input }
    }

    fn ensure_symbol(&self, symbol: &str) -> EngineResult<()> {
        if self.input.symbol.eq_ignore_ascii_case(symbol) {
            Ok(())
        } else {
            Err(EngineError::InvalidInput(format!(
                "no data for symbol '{}' (have '{}')",
                symbol, self.input.symbol
            )))
        }
    }
}

impl MarketDataProvider for StaticMarketData {
    fn snapshot(&self, symbol: &str) -> EngineResult<MarketSnapshot> {
        self.ensure_symbol(symbol)?;
        MarketSnapshot::from_quote(self.input.quote.clone())
    }

    fn history(&self, symbol: &str, limit: usize) -> EngineResult<Option<HistoricalSeries>> {
        self.ensure_symbol(symbol)?;
        Ok(self.input.history.as_ref().map(|rows| {
            let series = HistoricalSeries::from_rows(rows.clone());
            let bars = series.bars();
            let start = bars.len().saturating_sub(limit);
            HistoricalSeries::from_bars(bars[start..].to_vec())
        }))
    }

    fn volatility(&self) -> EngineResult<Option<VolatilityReading>> {
        Ok(self.input.vix)
    }
}
