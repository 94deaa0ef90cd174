//! Close-to-close historical volatility

use crate::common::math;
use crate::models::market::PriceBar;

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
/// Used when there are fewer than three closes to measure.
pub const DEFAULT_HISTORICAL_VOLATILITY: f64 = 20.0;

/// Annualised standard deviation of daily log returns, in percent.
pub fn calculate_historical_volatility(bars: &[PriceBar]) -> f64 {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::annualized_log_volatility(&closes, TRADING_DAYS_PER_YEAR)
        .unwrap_or(DEFAULT_HISTORICAL_VOLATILITY)
}
