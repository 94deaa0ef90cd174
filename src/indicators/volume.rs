//! Volume regime relative to the trailing average

use crate::common::{math, Cmp, Ladder};
use crate::models::indicators::{VolumeIndicator, VolumeSignal};
use crate::models::market::PriceBar;

const VOLUME_REGIMES: Ladder<VolumeSignal> = Ladder::new(
    &[
        (Cmp::Above, 1.5, VolumeSignal::High),
        (Cmp::Below, 0.7, VolumeSignal::Low),
    ],
    VolumeSignal::Normal,
);

/// Compare `current_volume` with the mean of the trailing `period` bars.
///
/// A zero or missing average yields a ratio of 1.0.
pub fn calculate_volume(bars: &[PriceBar], current_volume: f64, period: u32) -> VolumeIndicator {
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();
    let volume_ma = math::sma(&volumes, period as usize).unwrap_or(0.0);
    let ratio = if volume_ma > 0.0 {
        current_volume / volume_ma
    } else {
        1.0
    };

    VolumeIndicator {
        volume: current_volume,
        volume_ma,
        volume_ma_period: period,
        ratio,
    }
}

pub fn volume_signal(ratio: f64) -> VolumeSignal {
    VOLUME_REGIMES.lookup(ratio)
}
