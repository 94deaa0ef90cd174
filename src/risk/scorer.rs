//! Overall risk score from five independently capped contributions.
//!
//! | term              | cap |
//! |-------------------|-----|
//! | volatility index  | 30  |
//! | RSI extremity     | 20  |
//! | ATR % of price    | 20  |
//! | trend deviation   | 15  |
//! | breadth divergence| 15  |

use crate::common::{Cmp, Ladder};
use crate::config::RiskConfig;
use crate::models::indicators::IndicatorSet;
use crate::models::market::{MarketSnapshot, VolatilityReading};
use crate::models::risk::{
    BreadthRisk, RiskAssessment, RiskLevel, RiskRating, RsiRisk, SupportResistanceRisk, TrendRisk,
};
use tracing::debug;

pub const MAX_RISK_SCORE: u32 = 100;

const VIX_POINTS: Ladder<u32> = Ladder::new(
    &[(Cmp::Above, 25.0, 30), (Cmp::Above, 20.0, 20), (Cmp::Above, 15.0, 10)],
    5,
);

/// Keyed on |RSI - 50|: beyond 20 means RSI > 70 or < 30.
const RSI_POINTS: Ladder<u32> = Ladder::new(&[(Cmp::Above, 20.0, 20), (Cmp::Above, 10.0, 10)], 5);

const ATR_POINTS: Ladder<u32> = Ladder::new(&[(Cmp::Above, 2.5, 20), (Cmp::Above, 1.5, 10)], 5);

const TREND_POINTS: Ladder<u32> = Ladder::new(&[(Cmp::Above, 5.0, 15), (Cmp::Above, 3.0, 10)], 5);

const BREADTH_POINTS: Ladder<u32> =
    Ladder::new(&[(Cmp::Above, 1.5, 15), (Cmp::Above, 0.75, 10)], 5);

const VOLATILITY_RISK: Ladder<RiskLevel> = Ladder::new(
    &[(Cmp::Above, 20.0, RiskLevel::High), (Cmp::Above, 15.0, RiskLevel::Moderate)],
    RiskLevel::Low,
);

const RSI_RISK: Ladder<RsiRisk> = Ladder::new(
    &[
        (Cmp::Above, 70.0, RsiRisk::OverboughtReversal),
        (Cmp::Below, 30.0, RsiRisk::OversoldBounce),
    ],
    RsiRisk::NormalRange,
);

const BREADTH_RISK: Ladder<BreadthRisk> = Ladder::new(
    &[
        (Cmp::Above, 1.0, BreadthRisk::HighDivergence),
        (Cmp::Above, 0.5, BreadthRisk::ModerateDivergence),
    ],
    BreadthRisk::GoodCorrelation,
);

const RANGE_RISK: Ladder<SupportResistanceRisk> = Ladder::new(
    &[
        (Cmp::Above, 80.0, SupportResistanceRisk::NearResistance),
        (Cmp::Below, 20.0, SupportResistanceRisk::NearSupport),
    ],
    SupportResistanceRisk::MidRange,
);

const RATINGS: Ladder<RiskRating> = Ladder::new(
    &[
        (Cmp::AtLeast, 75.0, RiskRating::VeryHigh),
        (Cmp::AtLeast, 60.0, RiskRating::High),
        (Cmp::AtLeast, 40.0, RiskRating::Moderate),
        (Cmp::AtLeast, 25.0, RiskRating::Low),
    ],
    RiskRating::VeryLow,
);

pub struct RiskScorer {
    config: RiskConfig,
}

impl RiskScorer {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn assess(
        &self,
        snapshot: &MarketSnapshot,
        indicators: &IndicatorSet,
        vix: Option<&VolatilityReading>,
    ) -> RiskAssessment {
        let vix = match vix {
            Some(reading) => reading.current,
            None => {
                debug!(default_vix = self.config.default_vix, "RiskScorer: no volatility reading, using default");
                VolatilityReading::fallback(self.config.default_vix).current
            }
        };
        let divergence = snapshot.breadth_divergence();
        let position_in_range = snapshot
            .position_in_range()
            .map(|p| p * 100.0)
            .unwrap_or(50.0);

        let overall_score = Self::overall_score(vix, indicators, divergence);

        let assessment = RiskAssessment {
            vix,
            volatility_risk: VOLATILITY_RISK.lookup(vix),
            trend_risk: Self::trend_risk(indicators),
            rsi_risk: RSI_RISK.lookup(indicators.rsi),
            market_breadth: BREADTH_RISK.lookup(divergence),
            breadth_divergence: divergence,
            support_resistance_risk: RANGE_RISK.lookup(position_in_range),
            position_in_range,
            overall_score,
            overall_rating: Self::rating(overall_score),
        };

        debug!(
            score = assessment.overall_score,
            rating = ?assessment.overall_rating,
            vix = assessment.vix,
            divergence = assessment.breadth_divergence,
            "RiskScorer: assessment complete"
        );

        assessment
    }

    /// Sum of the five capped terms, clamped to 0..=100.
    pub fn overall_score(vix: f64, indicators: &IndicatorSet, divergence: f64) -> u32 {
        let score = VIX_POINTS.lookup(vix)
            + RSI_POINTS.lookup((indicators.rsi - 50.0).abs())
            + ATR_POINTS.lookup(indicators.atr_pct)
            + TREND_POINTS.lookup(indicators.price_vs_sma20.abs())
            + BREADTH_POINTS.lookup(divergence);
        score.min(MAX_RISK_SCORE)
    }

    pub fn rating(score: u32) -> RiskRating {
        RATINGS.lookup(f64::from(score))
    }

    fn trend_risk(indicators: &IndicatorSet) -> TrendRisk {
        let (vs20, vs50) = (indicators.price_vs_sma20, indicators.price_vs_sma50);
        if vs20 > 2.0 && vs50 > 5.0 {
            TrendRisk::OverboughtRisk
        } else if vs20 < -2.0 && vs50 < -5.0 {
            TrendRisk::OversoldBouncePotential
        } else {
            TrendRisk::Normal
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(RiskConfig::default())
    }
}
