//! Unit tests for market data records

use crate::support::{approx_eq, base_time, quote};
use chrono::Duration;
use tradewise::error::EngineError;
use tradewise::models::market::{
    FearLevel, HistoricalSeries, MarketSnapshot, PriceBar, RawBar, VixLevel, VolatilityReading,
};

#[test]
fn test_snapshot_derives_change() {
    let snapshot = MarketSnapshot::from_quote(quote(25_250.0, 25_000.0)).unwrap();
    assert!(approx_eq(snapshot.change(), 250.0, 1e-9));
    assert!(approx_eq(snapshot.pct_change(), 1.0, 1e-9));
}

#[test]
fn test_snapshot_rejects_zero_previous_close() {
    let mut q = quote(100.0, 100.0);
    q.previous_close = 0.0;
    let result = MarketSnapshot::from_quote(q);
    assert!(matches!(result, Err(EngineError::InvalidSnapshot(_))));
}

#[test]
fn test_snapshot_rejects_inverted_range() {
    let mut q = quote(100.0, 100.0);
    q.high = 90.0;
    q.low = 110.0;
    assert!(MarketSnapshot::from_quote(q).is_err());
}

#[test]
fn test_snapshot_rejects_non_finite_price() {
    let mut q = quote(100.0, 100.0);
    q.last_price = f64::NAN;
    assert!(MarketSnapshot::from_quote(q).is_err());
}

#[test]
fn test_snapshot_deserialization_validates() {
    let json = r#"{
        "last_price": 100.0, "open": 100.0, "high": 101.0, "low": 99.0,
        "previous_close": 0.0, "timestamp": "2025-01-06T04:00:00Z"
    }"#;
    assert!(serde_json::from_str::<MarketSnapshot>(json).is_err());
}

#[test]
fn test_correlated_change_falls_back_to_own_change() {
    let snapshot = MarketSnapshot::from_quote(quote(101.0, 100.0)).unwrap();
    assert!(approx_eq(snapshot.correlated_change_pct(), 1.0, 1e-9));
    assert_eq!(snapshot.breadth_divergence(), 0.0);

    let mut q = quote(101.0, 100.0);
    q.correlated_change_pct = Some(-0.5);
    let snapshot = MarketSnapshot::from_quote(q).unwrap();
    assert!(approx_eq(snapshot.breadth_divergence(), 1.5, 1e-9));
}

#[test]
fn test_position_in_range_empty_range() {
    let mut q = quote(100.0, 100.0);
    q.high = 100.0;
    q.low = 100.0;
    let snapshot = MarketSnapshot::from_quote(q).unwrap();
    assert_eq!(snapshot.position_in_range(), None);
}

#[test]
fn test_series_sorted_and_deduplicated() {
    let t = base_time();
    let bars = vec![
        PriceBar::new(3.0, 3.0, 3.0, 3.0, 1.0, t),
        PriceBar::new(1.0, 1.0, 1.0, 1.0, 1.0, t - Duration::days(2)),
        PriceBar::new(2.0, 2.0, 2.0, 2.0, 1.0, t - Duration::days(1)),
        PriceBar::new(4.0, 4.0, 4.0, 4.0, 1.0, t),
    ];
    let series = HistoricalSeries::from_bars(bars);
    assert_eq!(series.closes(), vec![1.0, 2.0, 4.0]);
    assert_eq!(series.last().map(|b| b.close), Some(4.0));
}

#[test]
fn test_series_drops_incomplete_rows() {
    let t = base_time();
    let rows = vec![
        RawBar {
            timestamp: t - Duration::days(1),
            open: Some(1.0),
            high: Some(1.0),
            low: Some(1.0),
            close: None,
            volume: Some(1.0),
        },
        RawBar {
            timestamp: t,
            open: Some(2.0),
            high: Some(2.0),
            low: Some(2.0),
            close: Some(2.0),
            volume: Some(10.0),
        },
    ];
    let series = HistoricalSeries::from_rows(rows);
    assert_eq!(series.len(), 1);
    assert_eq!(series.volumes(), vec![10.0]);
}

#[test]
fn test_vix_fear_levels() {
    assert_eq!(VolatilityReading::new(12.0).fear_level(), FearLevel::VeryLowFear);
    assert_eq!(VolatilityReading::new(15.0).fear_level(), FearLevel::LowFear);
    assert_eq!(VolatilityReading::new(18.0).fear_level(), FearLevel::Moderate);
    assert_eq!(VolatilityReading::new(25.0).fear_level(), FearLevel::ElevatedFear);
    assert_eq!(VolatilityReading::new(25.1).fear_level(), FearLevel::HighFear);
}

#[test]
fn test_vix_interpretation() {
    let interpretation = VolatilityReading::new(30.0).interpretation();
    assert_eq!(interpretation.level, VixLevel::VeryHigh);
    assert_eq!(interpretation.market_mood, "Fearful/Panic");
    assert_eq!(VolatilityReading::new(11.9).interpretation().level, VixLevel::VeryLow);
    assert_eq!(VolatilityReading::new(15.0).interpretation().level, VixLevel::Medium);
}
