//! Indicator engine: full indicator set for the latest bar, or the neutral
//! fallback when history is too short.

use crate::common::math;
use crate::config::IndicatorConfig;
use crate::indicators::momentum::{calculate_macd, calculate_rsi, detect_crossover, rsi_zone};
use crate::indicators::trend::calculate_sma;
use crate::indicators::volatility::{
    atr_percent, bollinger_position, calculate_atr, calculate_bollinger_bands,
    calculate_historical_volatility, DEFAULT_HISTORICAL_VOLATILITY,
};
use crate::indicators::volume::{calculate_volume, volume_signal};
use crate::models::indicators::{IndicatorBasis, IndicatorSet, MacdCrossover};
use crate::models::market::{HistoricalSeries, MarketSnapshot};
use tracing::{debug, warn};

pub struct IndicatorEngine {
    config: IndicatorConfig,
}

impl IndicatorEngine {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Compute indicators from `series`, measured against the snapshot's last
    /// price and volume.
    ///
    /// Never fails: missing or short history produces
    /// [`IndicatorSet::neutral`].
    pub fn compute(
        &self,
        series: Option<&HistoricalSeries>,
        snapshot: &MarketSnapshot,
    ) -> IndicatorSet {
        let price = snapshot.last_price();
        let bars = series.map(|s| s.bars()).unwrap_or(&[]);

        if bars.len() < self.config.min_history {
            warn!(
                bars = bars.len(),
                required = self.config.min_history,
                "IndicatorEngine: insufficient history, using neutral indicator set"
            );
            let hv = if bars.is_empty() {
                DEFAULT_HISTORICAL_VOLATILITY
            } else {
                calculate_historical_volatility(bars)
            };
            return IndicatorSet::neutral(price, hv);
        }

        let cfg = &self.config;
        let sma_20 = calculate_sma(bars, cfg.sma_fast as u32).unwrap_or(price);
        let sma_50 = calculate_sma(bars, cfg.sma_slow as u32).unwrap_or(price);

        let rsi = calculate_rsi(bars, cfg.rsi_period as u32)
            .map(|r| r.value)
            .unwrap_or(50.0);

        let macd = calculate_macd(
            bars,
            cfg.ema_fast as u32,
            cfg.ema_slow as u32,
            cfg.macd_signal as u32,
        );
        let macd_crossover = macd
            .as_ref()
            .map(detect_crossover)
            .unwrap_or(MacdCrossover::Neutral);

        let bollinger =
            calculate_bollinger_bands(bars, cfg.bollinger_period as u32, cfg.bollinger_std_dev);
        let bb_position = bollinger_position(bollinger.as_ref(), price);

        let atr = calculate_atr(bars, cfg.atr_period as u32);
        let atr_pct = atr.as_ref().map(|a| atr_percent(a, price)).unwrap_or(1.0);

        let volume = calculate_volume(bars, snapshot.volume(), cfg.volume_period as u32);

        let set = IndicatorSet {
            price,
            sma_20,
            sma_50,
            price_vs_sma20: math::pct_distance(price, sma_20),
            price_vs_sma50: math::pct_distance(price, sma_50),
            rsi,
            rsi_signal: rsi_zone(rsi),
            macd,
            macd_crossover,
            bollinger,
            bb_position,
            atr,
            atr_pct,
            volume_ratio: volume.ratio,
            volume_signal: volume_signal(volume.ratio),
            volume: Some(volume),
            historical_volatility: calculate_historical_volatility(bars),
            basis: IndicatorBasis::Full,
        };

        debug!(
            sma_20 = set.sma_20,
            sma_50 = set.sma_50,
            rsi = set.rsi,
            atr_pct = set.atr_pct,
            volume_ratio = set.volume_ratio,
            "IndicatorEngine: computed indicators"
        );

        set
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}
