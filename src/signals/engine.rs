//! Advisory pipeline: indicators, risk, signal, recommendation.

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::indicators::IndicatorEngine;
use crate::models::indicators::IndicatorSet;
use crate::models::market::{HistoricalSeries, MarketSnapshot, VolatilityReading};
use crate::models::recommendation::Recommendation;
use crate::models::risk::RiskAssessment;
use crate::models::signal::SignalAssessment;
use crate::risk::RiskScorer;
use crate::services::market_data::MarketDataProvider;
use crate::signals::decision::RecommendationResolver;
use crate::signals::scoring::SignalScorer;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Number of bars requested from a provider.
pub const HISTORY_LIMIT: usize = 90;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub indicators: IndicatorSet,
    pub risk: RiskAssessment,
    pub signal: SignalAssessment,
    pub recommendation: Recommendation,
}

pub struct AdvisoryEngine {
    indicators: IndicatorEngine,
    risk: RiskScorer,
    scorer: SignalScorer,
    resolver: RecommendationResolver,
    default_vix: f64,
}

impl AdvisoryEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            default_vix: config.risk.default_vix,
            indicators: IndicatorEngine::new(config.indicators),
            risk: RiskScorer::new(config.risk),
            scorer: SignalScorer::new(),
            resolver: RecommendationResolver::new(),
        }
    }

    /// Run one cycle. Pure in its inputs: identical arguments give identical output.
    pub fn advise(
        &self,
        snapshot: &MarketSnapshot,
        history: Option<&HistoricalSeries>,
        vix: Option<&VolatilityReading>,
    ) -> Advisory {
        let vix = vix
            .copied()
            .unwrap_or_else(|| VolatilityReading::fallback(self.default_vix));
        let indicators = self.indicators.compute(history, snapshot);
        let risk = self.risk.assess(snapshot, &indicators, Some(&vix));
        let signal = self.scorer.score(snapshot, &indicators, vix.current);
        let recommendation =
            self.resolver
                .resolve(signal.signal_score, risk.overall_score, snapshot, &indicators);

        Advisory {
            indicators,
            risk,
            signal,
            recommendation,
        }
    }

    /// Pull inputs from a provider and run one cycle.
    pub fn advise_from(
        &self,
        provider: &dyn MarketDataProvider,
        symbol: &str,
    ) -> EngineResult<Advisory> {
        let snapshot = provider.snapshot(symbol)?;
        let history = provider.history(symbol, HISTORY_LIMIT)?;
        let vix = provider.volatility()?;

        info!(
            symbol,
            price = snapshot.last_price(),
            bars = history.as_ref().map(|h| h.len()).unwrap_or(0),
            has_vix = vix.is_some(),
            "AdvisoryEngine: running advisory cycle"
        );

        Ok(self.advise(&snapshot, history.as_ref(), vix.as_ref()))
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
