//! Unit tests for the risk scorer

use crate::support::{neutral_indicators, quote, snapshot};
use tradewise::models::market::{MarketSnapshot, VolatilityReading};
use tradewise::models::risk::{
    BreadthRisk, RiskLevel, RiskRating, RsiRisk, SupportResistanceRisk, TrendRisk,
};
use tradewise::risk::RiskScorer;

#[test]
fn test_calm_market_scores_minimum_terms() {
    let indicators = neutral_indicators(100.0);
    assert_eq!(RiskScorer::overall_score(15.0, &indicators, 0.0), 25);
    assert_eq!(RiskScorer::rating(25), RiskRating::Low);
}

#[test]
fn test_exact_mid_score() {
    let mut indicators = neutral_indicators(100.0);
    indicators.rsi = 65.0;
    indicators.atr_pct = 2.0;
    indicators.price_vs_sma20 = -4.0;
    assert_eq!(RiskScorer::overall_score(22.0, &indicators, 1.0), 60);
    assert_eq!(RiskScorer::rating(60), RiskRating::High);
}

#[test]
fn test_rsi_term_is_symmetric() {
    let mut overbought = neutral_indicators(100.0);
    overbought.rsi = 75.0;
    let mut oversold = neutral_indicators(100.0);
    oversold.rsi = 25.0;
    assert_eq!(
        RiskScorer::overall_score(15.0, &overbought, 0.0),
        RiskScorer::overall_score(15.0, &oversold, 0.0)
    );
}

#[test]
fn test_score_clamped_to_100() {
    let mut indicators = neutral_indicators(100.0);
    indicators.rsi = 85.0;
    indicators.atr_pct = 3.0;
    indicators.price_vs_sma20 = 6.0;
    let score = RiskScorer::overall_score(30.0, &indicators, 2.0);
    assert_eq!(score, 100);
    assert_eq!(RiskScorer::rating(score), RiskRating::VeryHigh);
}

#[test]
fn test_rating_buckets() {
    assert_eq!(RiskScorer::rating(75), RiskRating::VeryHigh);
    assert_eq!(RiskScorer::rating(74), RiskRating::High);
    assert_eq!(RiskScorer::rating(40), RiskRating::Moderate);
    assert_eq!(RiskScorer::rating(24), RiskRating::VeryLow);
}

#[test]
fn test_assess_uses_default_vix_when_missing() {
    let assessment = RiskScorer::default().assess(&snapshot(101.0, 100.0), &neutral_indicators(101.0), None);
    assert_eq!(assessment.vix, 15.0);
    assert_eq!(assessment.volatility_risk, RiskLevel::Low);
    assert_eq!(assessment.market_breadth, BreadthRisk::GoodCorrelation);
    assert_eq!(assessment.overall_score, 25);

    let explicit = RiskScorer::default().assess(
        &snapshot(101.0, 100.0),
        &neutral_indicators(101.0),
        Some(&VolatilityReading::fallback(15.0)),
    );
    assert_eq!(assessment, explicit);
}

#[test]
fn test_assess_labels() {
    let mut q = quote(110.0, 100.0);
    q.high = 111.0;
    q.low = 100.0;
    q.correlated_change_pct = Some(8.5);
    let snap = MarketSnapshot::from_quote(q).unwrap();

    let mut indicators = neutral_indicators(110.0);
    indicators.rsi = 72.0;
    indicators.price_vs_sma20 = 3.0;
    indicators.price_vs_sma50 = 6.0;

    let vix = VolatilityReading::new(21.0);
    let assessment = RiskScorer::default().assess(&snap, &indicators, Some(&vix));

    assert_eq!(assessment.volatility_risk, RiskLevel::High);
    assert_eq!(assessment.rsi_risk, RsiRisk::OverboughtReversal);
    assert_eq!(assessment.trend_risk, TrendRisk::OverboughtRisk);
    assert_eq!(assessment.market_breadth, BreadthRisk::HighDivergence);
    assert_eq!(assessment.support_resistance_risk, SupportResistanceRisk::NearResistance);
    assert!(assessment.overall_score <= 100);
}
