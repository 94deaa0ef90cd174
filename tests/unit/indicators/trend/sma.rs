//! Unit tests for SMA indicator

use crate::support::{bars_from_closes, create_uptrend_bars};
use tradewise::indicators::trend::calculate_sma;

#[test]
fn test_sma_trailing_window() {
    let bars = bars_from_closes(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(calculate_sma(&bars, 2), Some(3.5));
    assert_eq!(calculate_sma(&bars, 5), None);
}

#[test]
fn test_sma_lags_price_in_uptrend() {
    let bars = create_uptrend_bars(50, 100.0, 1.0);
    let sma_20 = calculate_sma(&bars, 20).unwrap();
    let sma_50 = calculate_sma(&bars, 50).unwrap();
    assert!(bars.last().unwrap().close > sma_20);
    assert!(sma_20 > sma_50);
}
