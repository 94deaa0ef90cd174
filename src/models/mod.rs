//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod options;
pub mod recommendation;
pub mod risk;
pub mod signal;

pub use indicators::{
    AtrIndicator, BollingerBandsIndicator, IndicatorBasis, IndicatorSet, MacdCrossover,
    MacdIndicator, RsiIndicator, RsiZone, VolumeIndicator, VolumeSignal,
};
pub use market::{
    FearLevel, HistoricalSeries, MarketSnapshot, PriceBar, Quote, RawBar, VixInterpretation,
    VixLevel, VolatilityReading,
};
pub use options::{
    LegSide, OptionKind, OptionLeg, PayoffCurve, PayoffPoint, StrategyKind, StrategySetup,
};
pub use recommendation::{Action, Confidence, PivotLevels, Recommendation};
pub use risk::{
    BreadthRisk, RiskAssessment, RiskLevel, RiskRating, RsiRisk, SupportResistanceRisk, TrendRisk,
};
pub use signal::{SignalAssessment, SignalFactor, SignalReason};
