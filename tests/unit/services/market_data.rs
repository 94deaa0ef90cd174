//! Unit tests for the static market data provider

use crate::support::{base_time, quote};
use chrono::Duration;
use std::io::Write;
use tradewise::error::EngineError;
use tradewise::models::market::RawBar;
use tradewise::services::market_data::{MarketDataProvider, MarketInput, StaticMarketData};

fn rows(count: usize) -> Vec<RawBar> {
    (0..count)
        .map(|i| RawBar {
            timestamp: base_time() - Duration::days((count - i) as i64),
            open: Some(100.0 + i as f64),
            high: Some(101.0 + i as f64),
            low: Some(99.0 + i as f64),
            close: Some(100.0 + i as f64),
            volume: Some(1000.0),
        })
        .collect()
}

fn provider(history: Option<Vec<RawBar>>) -> StaticMarketData {
    StaticMarketData::new(MarketInput {
        symbol: "NIFTY".to_string(),
        quote: quote(25_100.0, 25_000.0),
        history,
        vix: None,
    })
}

#[test]
fn test_history_truncated_to_most_recent() {
    let series = provider(Some(rows(120))).history("NIFTY", 90).unwrap().unwrap();
    assert_eq!(series.len(), 90);
    assert_eq!(series.last().map(|b| b.close), Some(219.0));
}

#[test]
fn test_missing_history_and_vix() {
    let p = provider(None);
    assert!(p.history("nifty", 90).unwrap().is_none());
    assert!(p.volatility().unwrap().is_none());
    assert!(approx(p.snapshot("NIFTY").unwrap().pct_change(), 0.4));
}

#[test]
fn test_unknown_symbol() {
    assert!(matches!(
        provider(None).snapshot("SENSEX"),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn test_input_from_json_file() {
    let path = std::env::temp_dir().join("tradewise_market_input_test.json");
    let json = r#"{
        "symbol": "NIFTY",
        "quote": {
            "last_price": 25100.0, "open": 25000.0, "high": 25150.0, "low": 24950.0,
            "previous_close": 25000.0, "volume": 0.0, "correlated_change_pct": 0.2,
            "timestamp": "2025-01-06T04:00:00Z"
        },
        "vix": { "current": 13.5 }
    }"#;
    std::fs::File::create(&path)
        .and_then(|mut f| f.write_all(json.as_bytes()))
        .unwrap();

    let input = MarketInput::from_json_file(&path).unwrap();
    assert_eq!(input.symbol, "NIFTY");
    assert!(input.history.is_none());
    assert_eq!(input.vix.map(|v| v.current), Some(13.5));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_input_from_missing_file() {
    let result = MarketInput::from_json_file("/nonexistent/tradewise/input.json");
    assert!(matches!(result, Err(EngineError::Io(_))));
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
