use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    StrongBuy,
    Buy,
    StrongSell,
    Sell,
    StayOut,
    HoldWait,
}

impl Action {
    pub fn is_directional(&self) -> bool {
        !matches!(self, Action::StayOut | Action::HoldWait)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::StrongBuy => "STRONG BUY",
            Action::Buy => "BUY",
            Action::StrongSell => "STRONG SELL / SHORT",
            Action::Sell => "SELL / SHORT",
            Action::StayOut => "STAY OUT",
            Action::HoldWait => "HOLD / WAIT",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Moderate,
    Neutral,
}

/// Classic floor-trader pivots from the session's high, low and last price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    pub pivot: f64,
    pub r1: f64,
    pub r2: f64,
    pub s1: f64,
    pub s2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: Action,
    pub confidence: Confidence,
    pub rationale: String,
    pub position_size: String,
    pub signal_score: i32,
    pub risk_score: u32,
    pub entry: f64,
    pub target1: f64,
    pub target2: f64,
    pub stop_loss: f64,
    /// |target1 - entry| / |entry - stop_loss|, zero when the stop distance is zero.
    pub risk_reward: f64,
    pub levels: PivotLevels,
}
