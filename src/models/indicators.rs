use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub ema_fast: f64,
    pub ema_slow: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<(u32, u32, u32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: u32,
    pub std_dev: f64,
}

impl BollingerBandsIndicator {
    /// Position of `price` inside the bands in percent (0 = lower, 100 = upper).
    /// Collapsed bands report the midpoint.
    pub fn position(&self, price: f64) -> f64 {
        let width = self.upper - self.lower;
        if width <= 0.0 {
            return 50.0;
        }
        (price - self.lower) / width * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeIndicator {
    pub volume: f64,
    pub volume_ma: f64,
    pub volume_ma_period: u32,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiZone {
    Overbought,
    Bullish,
    Neutral,
    Bearish,
    Oversold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacdCrossover {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeSignal {
    High,
    Normal,
    Low,
}

/// Whether the set was computed from history or substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorBasis {
    Full,
    Fallback,
}

/// Technical indicators for the latest completed bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub price: f64,
    pub sma_20: f64,
    pub sma_50: f64,
    pub price_vs_sma20: f64,
    pub price_vs_sma50: f64,
    pub rsi: f64,
    pub rsi_signal: RsiZone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    pub macd_crossover: MacdCrossover,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerBandsIndicator>,
    pub bb_position: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<AtrIndicator>,
    pub atr_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeIndicator>,
    pub volume_ratio: f64,
    pub volume_signal: VolumeSignal,
    /// Annualised close-to-close volatility in percent.
    pub historical_volatility: f64,
    pub basis: IndicatorBasis,
}

impl IndicatorSet {
    /// Neutral set used when there is not enough history.
    pub fn neutral(price: f64, historical_volatility: f64) -> Self {
        Self {
            price,
            sma_20: price,
            sma_50: price,
            price_vs_sma20: 0.0,
            price_vs_sma50: 0.0,
            rsi: 50.0,
            rsi_signal: RsiZone::Neutral,
            macd: None,
            macd_crossover: MacdCrossover::Neutral,
            bollinger: None,
            bb_position: 50.0,
            atr: None,
            atr_pct: 1.0,
            volume: None,
            volume_ratio: 1.0,
            volume_signal: VolumeSignal::Normal,
            historical_volatility,
            basis: IndicatorBasis::Fallback,
        }
    }

    pub fn macd_histogram(&self) -> f64 {
        self.macd.map(|m| m.histogram).unwrap_or(0.0)
    }

    /// ATR in price units; one percent of price when no ATR was computed.
    pub fn atr_value(&self) -> f64 {
        self.atr.map(|a| a.value).unwrap_or(self.price * 0.01)
    }
}
