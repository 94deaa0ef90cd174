//! Unit tests for ATR and historical volatility

use crate::support::{approx_eq, create_flat_bars, create_uptrend_bars};
use tradewise::indicators::volatility::{
    atr_percent, calculate_atr, calculate_historical_volatility,
    DEFAULT_HISTORICAL_VOLATILITY,
};

#[test]
fn test_atr_insufficient_data() {
    assert!(calculate_atr(&create_flat_bars(14, 100.0), 14).is_none());
}

#[test]
fn test_atr_constant_range() {
    let atr = calculate_atr(&create_flat_bars(30, 100.0), 14).unwrap();
    assert!(approx_eq(atr.value, 2.0, 1e-12));
    assert!(approx_eq(atr_percent(&atr, 100.0), 2.0, 1e-12));
}

#[test]
fn test_atr_includes_gap_from_previous_close() {
    // Step 5 with a 2-point bar range: |high - prev_close| = 6 dominates.
    let atr = calculate_atr(&create_uptrend_bars(30, 100.0, 5.0), 14).unwrap();
    assert!(approx_eq(atr.value, 6.0, 1e-12));
}

#[test]
fn test_historical_volatility_flat_is_zero() {
    let hv = calculate_historical_volatility(&create_flat_bars(30, 100.0));
    assert!(approx_eq(hv, 0.0, 1e-12));
}

#[test]
fn test_historical_volatility_short_series_default() {
    let hv = calculate_historical_volatility(&create_flat_bars(2, 100.0));
    assert_eq!(hv, DEFAULT_HISTORICAL_VOLATILITY);
}
