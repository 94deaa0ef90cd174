//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::{MacdCrossover, MacdIndicator};
use crate::models::market::PriceBar;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of the MACD series
/// Histogram = MACD - Signal
pub fn calculate_macd(
    bars: &[PriceBar],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    if fast_period == 0 || signal_period == 0 || slow_period <= fast_period {
        return None;
    }
    if bars.len() < slow_period as usize + signal_period as usize {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let fast = math::ema_series(&closes, fast_period as usize);
    let slow = math::ema_series(&closes, slow_period as usize);

    let macd_values: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
    let signal_values = math::ema_series(&macd_values, signal_period as usize);

    let macd_line = *macd_values.last()?;
    let signal_line = *signal_values.last()?;

    Some(MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram: macd_line - signal_line,
        ema_fast: *fast.last()?,
        ema_slow: *slow.last()?,
        period: Some((fast_period, slow_period, signal_period)),
    })
}

/// Bullish when the MACD line is above its signal line, bearish otherwise.
pub fn detect_crossover(macd: &MacdIndicator) -> MacdCrossover {
    if macd.macd > macd.signal {
        MacdCrossover::Bullish
    } else {
        MacdCrossover::Bearish
    }
}
