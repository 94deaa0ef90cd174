//! Market data records handed to the engine by the fetch layer.

use crate::common::{Cmp, Ladder};
use crate::error::{EngineError, EngineResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw quote as delivered by a data source, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub last_price: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub previous_close: f64,
    #[serde(default)]
    pub volume: f64,
    /// Percentage change of the correlated index (Bank NIFTY for NIFTY).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlated_change_pct: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

/// Validated, immutable view of the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Quote")]
pub struct MarketSnapshot {
    last_price: f64,
    open: f64,
    high: f64,
    low: f64,
    previous_close: f64,
    volume: f64,
    change: f64,
    pct_change: f64,
    correlated_change_pct: Option<f64>,
    timestamp: DateTime<Utc>,
}

impl MarketSnapshot {
    /// Validate a quote and derive the absolute and percentage change.
    pub fn from_quote(quote: Quote) -> EngineResult<Self> {
        let prices = [
            ("last_price", quote.last_price),
            ("open", quote.open),
            ("high", quote.high),
            ("low", quote.low),
            ("previous_close", quote.previous_close),
        ];
        if let Some((name, value)) = prices.iter().find(|(_, v)| !v.is_finite() || *v <= 0.0) {
            return Err(EngineError::InvalidSnapshot(format!(
                "{} must be a positive finite price, got {}",
                name, value
            )));
        }
        if quote.high < quote.low {
            return Err(EngineError::InvalidSnapshot(format!(
                "high {} is below low {}",
                quote.high, quote.low
            )));
        }

        let change = quote.last_price - quote.previous_close;
        let pct_change = change / quote.previous_close * 100.0;

        Ok(Self {
            last_price: quote.last_price,
            open: quote.open,
            high: quote.high,
            low: quote.low,
            previous_close: quote.previous_close,
            volume: if quote.volume.is_finite() { quote.volume.max(0.0) } else { 0.0 },
            change,
            pct_change,
            correlated_change_pct: quote.correlated_change_pct.filter(|c| c.is_finite()),
            timestamp: quote.timestamp,
        })
    }

    pub fn last_price(&self) -> f64 {
        self.last_price
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn previous_close(&self) -> f64 {
        self.previous_close
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn change(&self) -> f64 {
        self.change
    }

    pub fn pct_change(&self) -> f64 {
        self.pct_change
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Change of the correlated index; falls back to this index's own change.
    pub fn correlated_change_pct(&self) -> f64 {
        self.correlated_change_pct.unwrap_or(self.pct_change)
    }

    /// Absolute gap between this index's change and the correlated index's change.
    pub fn breadth_divergence(&self) -> f64 {
        (self.pct_change - self.correlated_change_pct()).abs()
    }

    pub fn day_range(&self) -> f64 {
        self.high - self.low
    }

    /// Where the last price sits in the day's range, 0.0 (low) to 1.0 (high).
    /// `None` when the range is empty.
    pub fn position_in_range(&self) -> Option<f64> {
        let range = self.day_range();
        if range > 0.0 {
            Some((self.last_price - self.low) / range)
        } else {
            None
        }
    }
}

impl TryFrom<Quote> for MarketSnapshot {
    type Error = EngineError;

    fn try_from(quote: Quote) -> Result<Self, Self::Error> {
        Self::from_quote(quote)
    }
}

/// Volatility index reading (India VIX for NIFTY).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityReading {
    pub current: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_pct: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FearLevel {
    VeryLowFear,
    LowFear,
    Moderate,
    ElevatedFear,
    HighFear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VixLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Trading-oriented reading of the volatility index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VixInterpretation {
    pub level: VixLevel,
    pub market_mood: &'static str,
    pub suggested_approach: &'static str,
    pub risk_note: &'static str,
}

impl VolatilityReading {
    pub fn new(current: f64) -> Self {
        Self {
            current,
            change: None,
            change_pct: None,
        }
    }

    /// Reading used when no source could be reached.
    pub fn fallback(default_vix: f64) -> Self {
        Self::new(default_vix)
    }

    pub fn fear_level(&self) -> FearLevel {
        FEAR_LEVELS.lookup(self.current)
    }

    pub fn interpretation(&self) -> VixInterpretation {
        let level = VIX_LEVELS.lookup(self.current);
        let (market_mood, suggested_approach, risk_note) = match level {
            VixLevel::VeryLow => (
                "Complacent",
                "Sell options (Iron Condors, Credit Spreads)",
                "Low volatility - good for premium selling",
            ),
            VixLevel::Low => (
                "Calm",
                "Directional trades (Bull/Bear Spreads)",
                "Normal - good for most strategies",
            ),
            VixLevel::Medium => (
                "Cautious",
                "Defined risk spreads preferred",
                "Moderate - use stop losses",
            ),
            VixLevel::High => (
                "Nervous",
                "Reduce position size, wider spreads",
                "High volatility - trade carefully",
            ),
            VixLevel::VeryHigh => (
                "Fearful/Panic",
                "Avoid new positions or buy vol",
                "Extreme - protect capital",
            ),
        };
        VixInterpretation {
            level,
            market_mood,
            suggested_approach,
            risk_note,
        }
    }
}

const FEAR_LEVELS: Ladder<FearLevel> = Ladder::new(
    &[
        (Cmp::Above, 25.0, FearLevel::HighFear),
        (Cmp::Above, 20.0, FearLevel::ElevatedFear),
        (Cmp::Above, 15.0, FearLevel::Moderate),
        (Cmp::Above, 12.0, FearLevel::LowFear),
    ],
    FearLevel::VeryLowFear,
);

const VIX_LEVELS: Ladder<VixLevel> = Ladder::new(
    &[
        (Cmp::AtLeast, 30.0, VixLevel::VeryHigh),
        (Cmp::AtLeast, 20.0, VixLevel::High),
        (Cmp::AtLeast, 15.0, VixLevel::Medium),
        (Cmp::AtLeast, 12.0, VixLevel::Low),
    ],
    VixLevel::VeryLow,
);

/// One completed OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Row as returned by a chart endpoint; any field may be missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBar {
    pub timestamp: DateTime<Utc>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl RawBar {
    fn complete(&self) -> Option<PriceBar> {
        let fields = [self.open?, self.high?, self.low?, self.close?, self.volume?];
        if fields.iter().any(|v| !v.is_finite()) {
            return None;
        }
        Some(PriceBar::new(
            fields[0],
            fields[1],
            fields[2],
            fields[3],
            fields[4],
            self.timestamp,
        ))
    }
}

/// Chronologically ascending, de-duplicated bar history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PriceBar>", into = "Vec<PriceBar>")]
pub struct HistoricalSeries {
    bars: Vec<PriceBar>,
}

impl HistoricalSeries {
    /// Drop incomplete rows, then normalise ordering.
    pub fn from_rows(rows: Vec<RawBar>) -> Self {
        Self::from_bars(rows.iter().filter_map(RawBar::complete).collect())
    }

    /// Sort ascending by timestamp; for duplicate timestamps the later row wins.
    pub fn from_bars(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.timestamp);
        let mut normalised: Vec<PriceBar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match normalised.last_mut() {
                Some(last) if last.timestamp == bar.timestamp => *last = bar,
                _ => normalised.push(bar),
            }
        }
        Self { bars: normalised }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }
}

impl From<Vec<PriceBar>> for HistoricalSeries {
    fn from(bars: Vec<PriceBar>) -> Self {
        Self::from_bars(bars)
    }
}

impl From<HistoricalSeries> for Vec<PriceBar> {
    fn from(series: HistoricalSeries) -> Self {
        series.bars
    }
}
