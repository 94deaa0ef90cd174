//! Options strategy recommendations for the current market.

use crate::config::OptionsConfig;
use crate::error::EngineResult;
use crate::models::market::{MarketSnapshot, VolatilityReading};
use crate::models::options::{PayoffCurve, StrategyKind, StrategySetup};
use crate::options::catalog::StrategyProfile;
use crate::options::payoff::PayoffEvaluator;
use crate::options::regime::MarketRegime;
use crate::options::selector::StrategySelector;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStrategy {
    pub strategy: StrategyKind,
    pub profile: StrategyProfile,
    pub score: i32,
    pub setup: StrategySetup,
    pub payoff: PayoffCurve,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionsAdvice {
    pub regime: MarketRegime,
    pub strategies: Vec<RankedStrategy>,
}

pub struct OptionsAdvisor {
    selector: StrategySelector,
    payoff: PayoffEvaluator,
    default_vix: f64,
}

impl OptionsAdvisor {
    pub fn new(config: OptionsConfig) -> Self {
        Self {
            payoff: PayoffEvaluator::from_config(&config),
            default_vix: config.default_vix,
            selector: StrategySelector::new(config),
        }
    }

    /// Rank strategies for the regime and price each shortlisted one.
    pub fn recommend(
        &self,
        snapshot: &MarketSnapshot,
        vix: Option<&VolatilityReading>,
    ) -> EngineResult<OptionsAdvice> {
        let vix = vix
            .copied()
            .unwrap_or_else(|| VolatilityReading::fallback(self.default_vix))
            .current;
        let regime = MarketRegime::analyze(snapshot, vix);
        let spot = snapshot.last_price();

        let strategies = self
            .selector
            .shortlist(&regime)
            .into_iter()
            .filter(|scored| {
                let skip = self.selector.strikes_below_zero(scored.strategy, spot);
                if skip {
                    warn!(
                        strategy = ?scored.strategy,
                        spot,
                        "OptionsAdvisor: strikes would fall below zero, skipping strategy"
                    );
                }
                !skip
            })
            .map(|scored| -> EngineResult<RankedStrategy> {
                let setup = self.selector.build_setup(scored.strategy, spot, vix)?;
                let payoff = self.payoff.evaluate(&setup, spot)?;
                Ok(RankedStrategy {
                    strategy: scored.strategy,
                    profile: scored.strategy.profile(),
                    score: scored.score,
                    setup,
                    payoff,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        info!(
            trend = ?regime.trend,
            volatility = ?regime.volatility,
            vix,
            recommended = strategies.len(),
            "OptionsAdvisor: built strategy recommendations"
        );

        Ok(OptionsAdvice { regime, strategies })
    }
}

impl Default for OptionsAdvisor {
    fn default() -> Self {
        Self::new(OptionsConfig::default())
    }
}
