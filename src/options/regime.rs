//! Trend and volatility regime used to rank strategies.

use crate::common::{Cmp, Ladder};
use crate::models::market::MarketSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendBucket {
    VeryBullish,
    Bullish,
    Neutral,
    Bearish,
    VeryBearish,
}

impl TrendBucket {
    pub fn strength(&self) -> i32 {
        match self {
            TrendBucket::VeryBullish => 5,
            TrendBucket::Bullish => 3,
            TrendBucket::Neutral => 0,
            TrendBucket::Bearish => -3,
            TrendBucket::VeryBearish => -5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityBucket {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl VolatilityBucket {
    pub fn is_elevated(&self) -> bool {
        matches!(self, VolatilityBucket::VeryHigh | VolatilityBucket::High)
    }
}

const TRENDS: Ladder<TrendBucket> = Ladder::new(
    &[
        (Cmp::Above, 1.5, TrendBucket::VeryBullish),
        (Cmp::Above, 0.5, TrendBucket::Bullish),
        (Cmp::Below, -1.5, TrendBucket::VeryBearish),
        (Cmp::Below, -0.5, TrendBucket::Bearish),
    ],
    TrendBucket::Neutral,
);

const VOLATILITIES: Ladder<VolatilityBucket> = Ladder::new(
    &[
        (Cmp::Above, 25.0, VolatilityBucket::VeryHigh),
        (Cmp::Above, 20.0, VolatilityBucket::High),
        (Cmp::Above, 15.0, VolatilityBucket::Moderate),
    ],
    VolatilityBucket::Low,
);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketRegime {
    pub trend: TrendBucket,
    pub volatility: VolatilityBucket,
    pub strength: i32,
    pub vix: f64,
    /// 0.0 (day low) to 1.0 (day high); 0.5 for an empty range.
    pub position_in_range: f64,
    pub pct_change: f64,
}

impl MarketRegime {
    pub fn analyze(snapshot: &MarketSnapshot, vix: f64) -> Self {
        let trend = TRENDS.lookup(snapshot.pct_change());
        Self {
            trend,
            volatility: VOLATILITIES.lookup(vix),
            strength: trend.strength(),
            vix,
            position_in_range: snapshot.position_in_range().unwrap_or(0.5),
            pct_change: snapshot.pct_change(),
        }
    }
}
