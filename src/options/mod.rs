//! Options strategy ranking, pricing and payoff evaluation.

pub mod advisor;
pub mod catalog;
pub mod payoff;
pub mod pricing;
pub mod regime;
pub mod selector;

pub use advisor::{OptionsAdvice, OptionsAdvisor, RankedStrategy};
pub use catalog::{MarketBias, StrategyProfile};
pub use payoff::PayoffEvaluator;
pub use pricing::OptionPricer;
pub use regime::{MarketRegime, TrendBucket, VolatilityBucket};
pub use selector::{ScoredStrategy, StrategySelector};
