//! Risk assessment records.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendRisk {
    OverboughtRisk,
    OversoldBouncePotential,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiRisk {
    OverboughtReversal,
    OversoldBounce,
    NormalRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreadthRisk {
    HighDivergence,
    ModerateDivergence,
    GoodCorrelation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportResistanceRisk {
    NearResistance,
    NearSupport,
    MidRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskRating {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RiskRating::VeryHigh => "VERY HIGH RISK - Trade with extreme caution",
            RiskRating::High => "HIGH RISK - Reduce position size",
            RiskRating::Moderate => "MODERATE RISK - Normal caution",
            RiskRating::Low => "LOW RISK - Favorable conditions",
            RiskRating::VeryLow => "VERY LOW RISK - Ideal trading conditions",
        };
        f.write_str(text)
    }
}

impl fmt::Display for TrendRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrendRisk::OverboughtRisk => "Overbought Risk",
            TrendRisk::OversoldBouncePotential => "Oversold - Bounce Potential",
            TrendRisk::Normal => "Normal",
        })
    }
}

impl fmt::Display for RsiRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RsiRisk::OverboughtReversal => "Overbought - Reversal Risk High",
            RsiRisk::OversoldBounce => "Oversold - Bounce Likely",
            RsiRisk::NormalRange => "Normal Range",
        })
    }
}

impl fmt::Display for BreadthRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BreadthRisk::HighDivergence => "High Divergence - Caution",
            BreadthRisk::ModerateDivergence => "Moderate Divergence",
            BreadthRisk::GoodCorrelation => "Good Correlation",
        })
    }
}

impl fmt::Display for SupportResistanceRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SupportResistanceRisk::NearResistance => "Near resistance - Breakout or reversal",
            SupportResistanceRisk::NearSupport => "Near support - Breakdown or bounce",
            SupportResistanceRisk::MidRange => "Mid-range - Room to move",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub vix: f64,
    pub volatility_risk: RiskLevel,
    pub trend_risk: TrendRisk,
    pub rsi_risk: RsiRisk,
    pub market_breadth: BreadthRisk,
    /// |index change% - correlated index change%|
    pub breadth_divergence: f64,
    pub support_resistance_risk: SupportResistanceRisk,
    /// Last price position in the day's range, percent.
    pub position_in_range: f64,
    /// 0..=100, higher is riskier.
    pub overall_score: u32,
    pub overall_rating: RiskRating,
}
