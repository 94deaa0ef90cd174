//! Unit tests for RSI indicator

use crate::support::{approx_eq, bars_from_closes, create_flat_bars, create_uptrend_bars};
use tradewise::indicators::momentum::{calculate_rsi, rsi_zone};
use tradewise::models::indicators::RsiZone;

#[test]
fn test_rsi_insufficient_data() {
    let bars = create_uptrend_bars(14, 100.0, 1.0);
    assert!(calculate_rsi(&bars, 14).is_none());
}

#[test]
fn test_rsi_known_value() {
    // Seven +2 moves and seven -1 moves: RS = 2, RSI = 66.67
    let mut closes = vec![100.0];
    for _ in 0..7 {
        let last = *closes.last().unwrap();
        closes.push(last + 2.0);
        closes.push(last + 1.0);
    }
    let rsi = calculate_rsi(&bars_from_closes(&closes), 14).unwrap();
    assert!(approx_eq(rsi.value, 200.0 / 3.0, 1e-9));
    assert_eq!(rsi.period, Some(14));
}

#[test]
fn test_rsi_all_gains_is_100() {
    let rsi = calculate_rsi(&create_uptrend_bars(30, 100.0, 1.0), 14).unwrap();
    assert_eq!(rsi.value, 100.0);
}

#[test]
fn test_rsi_flat_window_saturates() {
    let rsi = calculate_rsi(&create_flat_bars(30, 100.0), 14).unwrap();
    assert_eq!(rsi.value, 100.0);
    assert_eq!(rsi_zone(rsi.value), RsiZone::Overbought);
}

#[test]
fn test_rsi_stays_in_bounds() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + ((i * 7) % 11) as f64 - 5.0).collect();
    let rsi = calculate_rsi(&bars_from_closes(&closes), 14).unwrap();
    assert!(rsi.value >= 0.0 && rsi.value <= 100.0);
}

#[test]
fn test_rsi_zones() {
    assert_eq!(rsi_zone(70.0), RsiZone::Overbought);
    assert_eq!(rsi_zone(65.0), RsiZone::Bullish);
    assert_eq!(rsi_zone(50.0), RsiZone::Neutral);
    assert_eq!(rsi_zone(30.0), RsiZone::Bearish);
    assert_eq!(rsi_zone(29.9), RsiZone::Oversold);
}
