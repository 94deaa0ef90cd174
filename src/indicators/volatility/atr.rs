//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::indicators::AtrIndicator;
use crate::models::market::PriceBar;

/// Calculate ATR (Average True Range)
///
/// Simple mean of the trailing `period` true ranges, each measured against
/// the previous bar's close.
pub fn calculate_atr(bars: &[PriceBar], period: u32) -> Option<AtrIndicator> {
    if period == 0 || bars.len() < period as usize + 1 {
        return None;
    }

    let tr_values: Vec<f64> = bars
        .windows(2)
        .map(|w| math::true_range(w[1].high, w[1].low, w[0].close))
        .collect();

    let atr_value = math::sma(&tr_values, period as usize)?;

    Some(AtrIndicator {
        value: atr_value,
        period,
    })
}

/// ATR as a percentage of `price`.
pub fn atr_percent(atr: &AtrIndicator, price: f64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }
    atr.value / price * 100.0
}
