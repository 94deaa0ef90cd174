//! Catalog of supported options strategies.

use crate::models::options::StrategyKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketBias {
    VeryBullish,
    Bullish,
    Neutral,
    Bearish,
    VeryBearish,
    Volatile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyProfile {
    pub name: &'static str,
    pub market: MarketBias,
    pub risk: &'static str,
    pub reward: &'static str,
    pub description: &'static str,
    pub best_when: &'static str,
}

impl StrategyKind {
    pub fn profile(&self) -> StrategyProfile {
        match self {
            StrategyKind::BullCallSpread => StrategyProfile {
                name: "Bull Call Spread",
                market: MarketBias::Bullish,
                risk: "Limited",
                reward: "Limited",
                description: "Buy lower strike call, sell higher strike call. Profit from moderate upward movement.",
                best_when: "Market is moderately bullish with low volatility",
            },
            StrategyKind::BearPutSpread => StrategyProfile {
                name: "Bear Put Spread",
                market: MarketBias::Bearish,
                risk: "Limited",
                reward: "Limited",
                description: "Buy higher strike put, sell lower strike put. Profit from moderate downward movement.",
                best_when: "Market is moderately bearish with low volatility",
            },
            StrategyKind::IronCondor => StrategyProfile {
                name: "Iron Condor",
                market: MarketBias::Neutral,
                risk: "Limited",
                reward: "Limited",
                description: "Sell OTM call spread + sell OTM put spread. Profit from sideways market.",
                best_when: "Market is range-bound with low volatility",
            },
            StrategyKind::IronButterfly => StrategyProfile {
                name: "Iron Butterfly",
                market: MarketBias::Neutral,
                risk: "Limited",
                reward: "Limited",
                description: "Sell ATM call and put, buy OTM call and put. Profit from minimal movement.",
                best_when: "Expecting very little price movement",
            },
            StrategyKind::LongStraddle => StrategyProfile {
                name: "Long Straddle",
                market: MarketBias::Volatile,
                risk: "Limited to Premium",
                reward: "Unlimited",
                description: "Buy ATM call and ATM put. Profit from large movement in either direction.",
                best_when: "Expecting big move but uncertain of direction",
            },
            StrategyKind::LongStrangle => StrategyProfile {
                name: "Long Strangle",
                market: MarketBias::Volatile,
                risk: "Limited to Premium",
                reward: "Unlimited",
                description: "Buy OTM call and OTM put. Cheaper than straddle, needs bigger move.",
                best_when: "Expecting large movement with high volatility",
            },
            StrategyKind::ShortStraddle => StrategyProfile {
                name: "Short Straddle",
                market: MarketBias::Neutral,
                risk: "Unlimited",
                reward: "Limited",
                description: "Sell ATM call and ATM put. Profit from no movement.",
                best_when: "Confident market will stay flat with low volatility",
            },
            StrategyKind::BullPutSpread => StrategyProfile {
                name: "Bull Put Spread",
                market: MarketBias::Bullish,
                risk: "Limited",
                reward: "Limited",
                description: "Sell higher strike put, buy lower strike put. Credit strategy for uptrend.",
                best_when: "Bullish but want to collect premium",
            },
            StrategyKind::BearCallSpread => StrategyProfile {
                name: "Bear Call Spread",
                market: MarketBias::Bearish,
                risk: "Limited",
                reward: "Limited",
                description: "Sell lower strike call, buy higher strike call. Credit strategy for downtrend.",
                best_when: "Bearish but want to collect premium",
            },
            StrategyKind::LongCall => StrategyProfile {
                name: "Long Call (Aggressive)",
                market: MarketBias::VeryBullish,
                risk: "Limited to Premium",
                reward: "Unlimited",
                description: "Buy call option. Maximum profit from strong upward movement.",
                best_when: "Very confident about strong upward move",
            },
            StrategyKind::LongPut => StrategyProfile {
                name: "Long Put (Aggressive)",
                market: MarketBias::VeryBearish,
                risk: "Limited to Premium",
                reward: "High",
                description: "Buy put option. Profit from strong downward movement.",
                best_when: "Very confident about strong downward move",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.profile().name
    }
}
