//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::market::PriceBar;

/// Trailing simple moving average of closes.
pub fn calculate_sma(bars: &[PriceBar], period: u32) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::sma(&closes, period as usize)
}
