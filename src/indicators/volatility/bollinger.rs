//! Bollinger Bands around a trailing mean of closes

use crate::common::math;
use crate::models::indicators::BollingerBandsIndicator;
use crate::models::market::PriceBar;

/// Band position reported when the bands could not be computed.
pub const NEUTRAL_BAND_POSITION: f64 = 50.0;

/// Bands `std_dev` sample deviations either side of the `period` SMA of closes.
pub fn calculate_bollinger_bands(
    bars: &[PriceBar],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    let window = period as usize;
    if bars.len() < window {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let middle = math::sma(&closes, window)?;
    let spread = std_dev * math::standard_deviation(&closes, window)?;

    Some(BollingerBandsIndicator {
        upper: middle + spread,
        middle,
        lower: middle - spread,
        period,
        std_dev,
    })
}

pub fn bollinger_position(bands: Option<&BollingerBandsIndicator>, price: f64) -> f64 {
    bands.map_or(NEUTRAL_BAND_POSITION, |b| b.position(price))
}
