//! Unit tests for recommendation resolution

use crate::support::{approx_eq, neutral_indicators, quote};
use tradewise::models::market::MarketSnapshot;
use tradewise::models::recommendation::{Action, Confidence};
use tradewise::signals::{risk_reward, RecommendationResolver};

fn session() -> MarketSnapshot {
    let mut q = quote(100.0, 99.0);
    q.high = 110.0;
    q.low = 90.0;
    MarketSnapshot::from_quote(q).unwrap()
}

#[test]
fn test_decision_table() {
    let cases = [
        (7, 50, Action::StrongBuy),
        (6, 59, Action::StrongBuy),
        (6, 65, Action::Buy),
        (3, 69, Action::Buy),
        (3, 70, Action::HoldWait),
        (-7, 50, Action::StrongSell),
        (-4, 69, Action::Sell),
        (-4, 70, Action::HoldWait),
        (7, 80, Action::StayOut),
        (0, 75, Action::StayOut),
        (0, 50, Action::HoldWait),
        (2, 10, Action::HoldWait),
    ];
    for (score, risk, expected) in cases {
        assert_eq!(
            RecommendationResolver::resolve_action(score, risk),
            expected,
            "score {} risk {}",
            score,
            risk
        );
    }
}

#[test]
fn test_strong_buy_uses_atr_offsets() {
    let rec = RecommendationResolver::new().resolve(7, 50, &session(), &neutral_indicators(100.0));
    assert_eq!(rec.action, Action::StrongBuy);
    assert_eq!(rec.confidence, Confidence::High);
    assert!(approx_eq(rec.target1, 101.5, 1e-9));
    assert!(approx_eq(rec.stop_loss, 99.0, 1e-9));
    assert!(approx_eq(rec.target2, rec.levels.r1, 1e-9));
    assert!(approx_eq(rec.risk_reward, 1.5, 1e-9));
    assert_eq!(rec.signal_score, 7);
    assert_eq!(rec.risk_score, 50);
}

#[test]
fn test_sell_targets_below_entry() {
    let rec = RecommendationResolver::new().resolve(-4, 50, &session(), &neutral_indicators(100.0));
    assert_eq!(rec.action, Action::Sell);
    assert!(approx_eq(rec.target1, 99.0, 1e-9));
    assert!(approx_eq(rec.stop_loss, 101.0, 1e-9));
    assert!(approx_eq(rec.target2, rec.levels.s1, 1e-9));
}

#[test]
fn test_hold_uses_pivot_levels() {
    let rec = RecommendationResolver::new().resolve(0, 50, &session(), &neutral_indicators(100.0));
    assert_eq!(rec.action, Action::HoldWait);
    // pivot 100, r1 110, r2 120, s1 90
    assert!(approx_eq(rec.target1, 110.0, 1e-9));
    assert!(approx_eq(rec.target2, 120.0, 1e-9));
    assert!(approx_eq(rec.stop_loss, 90.0, 1e-9));
    assert!(approx_eq(rec.risk_reward, 1.0, 1e-9));
}

#[test]
fn test_stay_out_guidance() {
    let rec = RecommendationResolver::new().resolve(7, 80, &session(), &neutral_indicators(100.0));
    assert_eq!(rec.action, Action::StayOut);
    assert!(!rec.action.is_directional());
    assert_eq!(rec.position_size, "0% - Do not trade");
}

#[test]
fn test_risk_reward_zero_stop_distance() {
    assert_eq!(risk_reward(100.0, 110.0, 100.0), 0.0);
}
