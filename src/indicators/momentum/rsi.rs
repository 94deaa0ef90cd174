//! RSI (Relative Strength Index) indicator

use crate::common::{Cmp, Ladder};
use crate::models::indicators::{RsiIndicator, RsiZone};
use crate::models::market::PriceBar;

const RSI_ZONES: Ladder<RsiZone> = Ladder::new(
    &[
        (Cmp::AtLeast, 70.0, RsiZone::Overbought),
        (Cmp::AtLeast, 60.0, RsiZone::Bullish),
        (Cmp::AtLeast, 40.0, RsiZone::Neutral),
        (Cmp::AtLeast, 30.0, RsiZone::Bearish),
    ],
    RsiZone::Oversold,
);

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss, both simple means over the trailing
/// `period` close-to-close deltas.
pub fn calculate_rsi(bars: &[PriceBar], period: u32) -> Option<RsiIndicator> {
    let period_len = period as usize;
    if period == 0 || bars.len() < period_len + 1 {
        return None;
    }

    let deltas: Vec<f64> = bars.windows(2).map(|w| w[1].close - w[0].close).collect();
    let window = &deltas[deltas.len() - period_len..];

    let avg_gain = window.iter().filter(|d| **d > 0.0).sum::<f64>() / period as f64;
    let avg_loss = window.iter().filter(|d| **d < 0.0).map(|d| d.abs()).sum::<f64>() / period as f64;

    // Zero average loss saturates, flat windows included.
    let value = if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    };

    Some(RsiIndicator {
        value,
        period: Some(period),
    })
}

/// Label an RSI reading.
pub fn rsi_zone(rsi: f64) -> RsiZone {
    RSI_ZONES.lookup(rsi)
}
