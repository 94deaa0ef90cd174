//! Directional signal score.
//!
//! Seven factors each contribute a bounded integer; the sum lies in -14..=14.
//!
//! | factor            | range |
//! |-------------------|-------|
//! | trend vs SMAs     | ±3    |
//! | RSI momentum      | -3..3 |
//! | MACD              | ±2    |
//! | volatility index  | ±2    |
//! | volume            | ±1    |
//! | breadth           | ±2    |
//! | intraday position | ±1    |

use crate::common::{Cmp, Ladder};
use crate::models::indicators::{IndicatorSet, MacdCrossover, VolumeSignal};
use crate::models::market::MarketSnapshot;
use crate::models::signal::{SignalAssessment, SignalFactor, SignalReason};
use tracing::debug;

pub const MAX_SIGNAL_SCORE: i32 = 15;

/// Breadth only counts when both indices move together within this gap.
const BREADTH_AGREEMENT_PCT: f64 = 0.3;
const BREADTH_MIN_MOVE_PCT: f64 = 0.5;

const VIX_SIGNALS: Ladder<(i32, &str)> = Ladder::new(
    &[
        (Cmp::Below, 12.0, (2, "Very low volatility (stable market)")),
        (Cmp::Below, 15.0, (1, "Low volatility (calm market)")),
        (Cmp::Above, 25.0, (-2, "High volatility (risky market)")),
        (Cmp::Above, 20.0, (-1, "Elevated volatility (caution)")),
    ],
    (0, "Moderate volatility"),
);

#[derive(Debug, Clone, Copy, Default)]
pub struct SignalScorer;

impl SignalScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(
        &self,
        snapshot: &MarketSnapshot,
        indicators: &IndicatorSet,
        vix: f64,
    ) -> SignalAssessment {
        let mut reasons = Vec::with_capacity(7);

        reasons.push(Self::trend(indicators));
        reasons.extend(Self::momentum(indicators.rsi));
        reasons.push(Self::macd(indicators));
        reasons.push(Self::volatility(vix));
        reasons.push(Self::volume(indicators.volume_signal, snapshot.pct_change()));
        reasons.push(Self::breadth(snapshot));
        reasons.extend(Self::intraday(snapshot));

        let signal_score = reasons
            .iter()
            .map(|r| r.contribution)
            .sum::<i32>()
            .clamp(-MAX_SIGNAL_SCORE, MAX_SIGNAL_SCORE);

        debug!(signal_score, factors = reasons.len(), "SignalScorer: scored snapshot");

        SignalAssessment {
            signal_score,
            reasons,
        }
    }

    fn trend(indicators: &IndicatorSet) -> SignalReason {
        let (vs20, vs50) = (indicators.price_vs_sma20, indicators.price_vs_sma50);
        let (contribution, text) = if vs20 > 2.0 && vs50 > 2.0 {
            (3, "Strong uptrend (above both SMAs)")
        } else if vs20 > 0.0 && vs50 > 0.0 {
            (2, "Uptrend (above SMAs)")
        } else if vs20 < -2.0 && vs50 < -2.0 {
            (-3, "Strong downtrend (below both SMAs)")
        } else if vs20 < 0.0 && vs50 < 0.0 {
            (-2, "Downtrend (below SMAs)")
        } else {
            (0, "Mixed trend signals")
        };
        reason(SignalFactor::Trend, contribution, text)
    }

    /// Oversold readings are rewarded more than overbought ones are penalised.
    /// Readings exactly on a zone boundary contribute nothing.
    fn momentum(rsi: f64) -> Option<SignalReason> {
        let (contribution, text) = if rsi > 40.0 && rsi < 60.0 {
            (1, "RSI neutral (balanced momentum)")
        } else if rsi > 30.0 && rsi < 40.0 {
            (2, "RSI oversold (bullish reversal setup)")
        } else if rsi > 60.0 && rsi < 70.0 {
            (-1, "RSI approaching overbought")
        } else if rsi > 70.0 {
            (-3, "RSI overbought (bearish reversal risk)")
        } else if rsi < 30.0 {
            (3, "RSI oversold (strong bounce potential)")
        } else {
            return None;
        };
        Some(reason(SignalFactor::Momentum, contribution, text))
    }

    fn macd(indicators: &IndicatorSet) -> SignalReason {
        let histogram = indicators.macd_histogram();
        match indicators.macd_crossover {
            MacdCrossover::Bullish if histogram > 0.0 => {
                reason(SignalFactor::Macd, 2, "MACD bullish crossover")
            }
            MacdCrossover::Bearish if histogram < 0.0 => {
                reason(SignalFactor::Macd, -2, "MACD bearish crossover")
            }
            _ => reason(SignalFactor::Macd, 0, "MACD neutral"),
        }
    }

    fn volatility(vix: f64) -> SignalReason {
        let (contribution, text) = VIX_SIGNALS.lookup(vix);
        reason(SignalFactor::Volatility, contribution, text)
    }

    fn volume(signal: VolumeSignal, pct_change: f64) -> SignalReason {
        match signal {
            VolumeSignal::High if pct_change > 0.0 => {
                reason(SignalFactor::Volume, 1, "High volume with uptrend (conviction)")
            }
            VolumeSignal::High => reason(
                SignalFactor::Volume,
                -1,
                "High volume with downtrend (selling pressure)",
            ),
            VolumeSignal::Low => reason(SignalFactor::Volume, 0, "Low volume (weak conviction)"),
            VolumeSignal::Normal => reason(SignalFactor::Volume, 0, "Normal volume"),
        }
    }

    fn breadth(snapshot: &MarketSnapshot) -> SignalReason {
        let change = snapshot.pct_change();
        if snapshot.breadth_divergence() >= BREADTH_AGREEMENT_PCT {
            return reason(SignalFactor::Breadth, 0, "Market divergence (mixed signals)");
        }
        if change > BREADTH_MIN_MOVE_PCT {
            reason(SignalFactor::Breadth, 2, "Broad market rally (strong conviction)")
        } else if change < -BREADTH_MIN_MOVE_PCT {
            reason(SignalFactor::Breadth, -2, "Broad market decline (weak)")
        } else {
            reason(SignalFactor::Breadth, 0, "Broad market flat")
        }
    }

    fn intraday(snapshot: &MarketSnapshot) -> Option<SignalReason> {
        let position = snapshot.position_in_range()?;
        Some(if position > 0.75 {
            reason(SignalFactor::IntradayPosition, 1, "Near day high (bullish)")
        } else if position < 0.25 {
            reason(SignalFactor::IntradayPosition, -1, "Near day low (bearish)")
        } else {
            reason(SignalFactor::IntradayPosition, 0, "Mid-range position")
        })
    }
}

fn reason(factor: SignalFactor, contribution: i32, description: &str) -> SignalReason {
    SignalReason {
        factor,
        description: description.to_string(),
        contribution,
    }
}
