//! Unit tests for signal scoring

use crate::support::{neutral_indicators, quote, snapshot};
use tradewise::models::indicators::{MacdCrossover, MacdIndicator, VolumeSignal};
use tradewise::models::market::MarketSnapshot;
use tradewise::models::signal::SignalFactor;
use tradewise::signals::scoring::MAX_SIGNAL_SCORE;
use tradewise::signals::SignalScorer;

#[test]
fn test_neutral_indicators_rally_day() {
    let snap = snapshot(101.0, 100.0);
    let assessment = SignalScorer::new().score(&snap, &neutral_indicators(101.0), 14.0);

    assert_eq!(assessment.contribution_of(SignalFactor::Trend), 0);
    assert_eq!(assessment.contribution_of(SignalFactor::Momentum), 1);
    assert_eq!(assessment.contribution_of(SignalFactor::Volatility), 1);
    assert_eq!(assessment.contribution_of(SignalFactor::Breadth), 2);
    assert_eq!(assessment.contribution_of(SignalFactor::IntradayPosition), 0);
    assert_eq!(assessment.signal_score, 4);
    assert_eq!(assessment.rationale().len(), assessment.reasons.len());
}

#[test]
fn test_rsi_boundaries_add_no_reason() {
    let snap = snapshot(101.0, 100.0);
    for rsi in [30.0, 40.0, 60.0, 70.0] {
        let mut indicators = neutral_indicators(101.0);
        indicators.rsi = rsi;
        let assessment = SignalScorer::new().score(&snap, &indicators, 17.0);
        assert!(
            !assessment.reasons.iter().any(|r| r.factor == SignalFactor::Momentum),
            "rsi {} should not score",
            rsi
        );
    }
}

#[test]
fn test_rsi_scoring_is_asymmetric() {
    let snap = snapshot(100.0, 100.0);
    let mut oversold = neutral_indicators(100.0);
    oversold.rsi = 25.0;
    let mut overbought = neutral_indicators(100.0);
    overbought.rsi = 75.0;
    let scorer = SignalScorer::new();
    assert_eq!(scorer.score(&snap, &oversold, 17.0).contribution_of(SignalFactor::Momentum), 3);
    assert_eq!(scorer.score(&snap, &overbought, 17.0).contribution_of(SignalFactor::Momentum), -3);

    let mut approaching = neutral_indicators(100.0);
    approaching.rsi = 35.0;
    assert_eq!(scorer.score(&snap, &approaching, 17.0).contribution_of(SignalFactor::Momentum), 2);
    approaching.rsi = 65.0;
    assert_eq!(scorer.score(&snap, &approaching, 17.0).contribution_of(SignalFactor::Momentum), -1);
}

#[test]
fn test_breadth_ignored_on_divergence() {
    let mut q = quote(101.0, 100.0);
    q.correlated_change_pct = Some(0.5);
    let snap = MarketSnapshot::from_quote(q).unwrap();
    let assessment = SignalScorer::new().score(&snap, &neutral_indicators(101.0), 17.0);
    assert_eq!(assessment.contribution_of(SignalFactor::Breadth), 0);
}

#[test]
fn test_intraday_skipped_on_empty_range() {
    let mut q = quote(100.0, 100.0);
    q.high = 100.0;
    q.low = 100.0;
    let snap = MarketSnapshot::from_quote(q).unwrap();
    let assessment = SignalScorer::new().score(&snap, &neutral_indicators(100.0), 17.0);
    assert!(!assessment
        .reasons
        .iter()
        .any(|r| r.factor == SignalFactor::IntradayPosition));
}

#[test]
fn test_maximum_bullish_score() {
    let mut q = quote(101.0, 100.0);
    q.high = 101.5;
    q.low = 99.0;
    let snap = MarketSnapshot::from_quote(q).unwrap();

    let mut indicators = neutral_indicators(101.0);
    indicators.price_vs_sma20 = 3.0;
    indicators.price_vs_sma50 = 3.0;
    indicators.rsi = 25.0;
    indicators.macd = Some(MacdIndicator {
        macd: 1.5,
        signal: 0.5,
        histogram: 1.0,
        ema_fast: 101.0,
        ema_slow: 99.5,
        period: Some((12, 26, 9)),
    });
    indicators.macd_crossover = MacdCrossover::Bullish;
    indicators.volume_signal = VolumeSignal::High;

    let assessment = SignalScorer::new().score(&snap, &indicators, 10.0);
    assert_eq!(assessment.signal_score, 14);
    assert!(assessment.signal_score <= MAX_SIGNAL_SCORE);
}

#[test]
fn test_maximum_bearish_score() {
    let mut q = quote(99.0, 100.0);
    q.high = 101.0;
    q.low = 98.5;
    let snap = MarketSnapshot::from_quote(q).unwrap();

    let mut indicators = neutral_indicators(99.0);
    indicators.price_vs_sma20 = -3.0;
    indicators.price_vs_sma50 = -3.0;
    indicators.rsi = 75.0;
    indicators.macd = Some(MacdIndicator {
        macd: -1.5,
        signal: -0.5,
        histogram: -1.0,
        ema_fast: 99.0,
        ema_slow: 100.5,
        period: Some((12, 26, 9)),
    });
    indicators.macd_crossover = MacdCrossover::Bearish;
    indicators.volume_signal = VolumeSignal::High;

    let assessment = SignalScorer::new().score(&snap, &indicators, 30.0);
    assert_eq!(assessment.signal_score, -14);
    assert!(assessment.signal_score >= -MAX_SIGNAL_SCORE);
}
