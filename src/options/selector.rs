//! Strategy ranking and pricing of concrete setups.

use crate::config::OptionsConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::options::{LegSide, OptionKind, OptionLeg, StrategyKind, StrategySetup};
use crate::options::pricing::{years_from_days, OptionPricer};
use crate::options::regime::{MarketRegime, TrendBucket, VolatilityBucket};
use serde::{Deserialize, Serialize};
use tracing::debug;

// Strike offsets, in strike steps from the at-the-money strike.
const SPREAD_WIDTH_STEPS: f64 = 4.0;
const CONDOR_SHORT_STEPS: f64 = 3.0;
const CONDOR_LONG_STEPS: f64 = 5.0;
const STRANGLE_STEPS: f64 = 2.0;

const VERY_BULLISH_BASE: &[(StrategyKind, i32)] = &[
    (StrategyKind::LongCall, 95),
    (StrategyKind::BullCallSpread, 85),
    (StrategyKind::BullPutSpread, 80),
];

const BULLISH_BASE: &[(StrategyKind, i32)] = &[
    (StrategyKind::BullCallSpread, 90),
    (StrategyKind::BullPutSpread, 85),
    (StrategyKind::LongCall, 70),
];

const VERY_BEARISH_BASE: &[(StrategyKind, i32)] = &[
    (StrategyKind::LongPut, 95),
    (StrategyKind::BearPutSpread, 85),
    (StrategyKind::BearCallSpread, 80),
];

const BEARISH_BASE: &[(StrategyKind, i32)] = &[
    (StrategyKind::BearPutSpread, 90),
    (StrategyKind::BearCallSpread, 85),
    (StrategyKind::LongPut, 70),
];

const NEUTRAL_BASE: &[(StrategyKind, i32)] = &[
    (StrategyKind::IronCondor, 85),
    (StrategyKind::IronButterfly, 80),
    (StrategyKind::ShortStraddle, 70),
    (StrategyKind::BullPutSpread, 65),
    (StrategyKind::BearCallSpread, 65),
];

const ELEVATED_VOL_ADJUSTMENTS: &[(StrategyKind, i32)] = &[
    (StrategyKind::LongStraddle, 30),
    (StrategyKind::LongStrangle, 25),
    (StrategyKind::LongCall, 15),
    (StrategyKind::LongPut, 15),
    (StrategyKind::ShortStraddle, -40),
    (StrategyKind::IronCondor, -20),
];

const LOW_VOL_ADJUSTMENTS: &[(StrategyKind, i32)] = &[
    (StrategyKind::IronCondor, 20),
    (StrategyKind::IronButterfly, 20),
    (StrategyKind::ShortStraddle, 15),
    (StrategyKind::LongStraddle, -30),
    (StrategyKind::LongStrangle, -25),
];

fn base_scores(trend: TrendBucket) -> &'static [(StrategyKind, i32)] {
    match trend {
        TrendBucket::VeryBullish => VERY_BULLISH_BASE,
        TrendBucket::Bullish => BULLISH_BASE,
        TrendBucket::Neutral => NEUTRAL_BASE,
        TrendBucket::Bearish => BEARISH_BASE,
        TrendBucket::VeryBearish => VERY_BEARISH_BASE,
    }
}

fn volatility_adjustments(volatility: VolatilityBucket) -> &'static [(StrategyKind, i32)] {
    if volatility.is_elevated() {
        ELEVATED_VOL_ADJUSTMENTS
    } else if volatility == VolatilityBucket::Low {
        LOW_VOL_ADJUSTMENTS
    } else {
        &[]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredStrategy {
    pub strategy: StrategyKind,
    pub score: i32,
}

pub struct StrategySelector {
    config: OptionsConfig,
    pricer: OptionPricer,
}

impl StrategySelector {
    pub fn new(config: OptionsConfig) -> Self {
        Self {
            pricer: OptionPricer::from_config(&config),
            config,
        }
    }

    /// Scores in first-seen order: trend base table, then volatility
    /// adjustments. A strategy only introduced by an adjustment starts at 0.
    pub fn score_all(&self, regime: &MarketRegime) -> Vec<ScoredStrategy> {
        let mut scores: Vec<ScoredStrategy> = base_scores(regime.trend)
            .iter()
            .map(|&(strategy, score)| ScoredStrategy { strategy, score })
            .collect();

        for &(strategy, delta) in volatility_adjustments(regime.volatility) {
            match scores.iter_mut().find(|s| s.strategy == strategy) {
                Some(entry) => entry.score += delta,
                None => scores.push(ScoredStrategy {
                    strategy,
                    score: delta,
                }),
            }
        }

        scores
    }

    /// Strategies scoring above the configured minimum, best first, ties in
    /// first-seen order.
    pub fn shortlist(&self, regime: &MarketRegime) -> Vec<ScoredStrategy> {
        let mut scores = self.score_all(regime);
        scores.sort_by(|a, b| b.score.cmp(&a.score));

        let shortlist: Vec<ScoredStrategy> = scores
            .into_iter()
            .filter(|s| s.score > self.config.min_strategy_score)
            .take(self.config.max_recommendations)
            .collect();

        debug!(
            trend = ?regime.trend,
            volatility = ?regime.volatility,
            shortlisted = shortlist.len(),
            "StrategySelector: ranked strategies"
        );

        shortlist
    }

    /// True when a valid `spot` is too low for every leg of `kind` to get a
    /// positive strike.
    pub fn strikes_below_zero(&self, kind: StrategyKind, spot: f64) -> bool {
        let step = self.config.strike_step;
        if !(spot.is_finite() && spot > 0.0 && step.is_finite() && step > 0.0) {
            return false;
        }
        atm_strike(spot, step) - step * steps_below_atm(kind) <= 0.0
    }

    /// Price one lot of `kind` around the strike nearest `spot`.
    pub fn build_setup(&self, kind: StrategyKind, spot: f64, vix: f64) -> EngineResult<StrategySetup> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(EngineError::InvalidInput(format!(
                "spot must be positive and finite, got {}",
                spot
            )));
        }
        let step = self.config.strike_step;
        if !(step.is_finite() && step > 0.0) {
            return Err(EngineError::Config(format!(
                "strike_step must be positive, got {}",
                step
            )));
        }

        let atm = atm_strike(spot, step);
        let volatility = vix / 100.0;
        let t = years_from_days(self.config.expiry_days);
        let width = step * SPREAD_WIDTH_STEPS;

        let leg = |side: LegSide, option: OptionKind, strike: f64| -> EngineResult<OptionLeg> {
            let premium = self.pricer.price(option, spot, strike, t, volatility)?;
            Ok(OptionLeg {
                side,
                kind: option,
                strike,
                expiry_days: self.config.expiry_days,
                lots: 1,
                lot_size: self.config.lot_size,
                premium,
            })
        };

        use LegSide::{Buy, Sell};
        use OptionKind::{Call, Put};

        // Per-unit (max_profit, max_loss, breakevens, probability of profit).
        let (legs, max_profit, max_loss, breakeven, pop) = match kind {
            StrategyKind::BullCallSpread => {
                let long = leg(Buy, Call, atm)?;
                let short = leg(Sell, Call, atm + width)?;
                let debit = long.premium - short.premium;
                (vec![long, short], Some(width - debit), Some(debit), vec![atm + debit], 60)
            }
            StrategyKind::BearPutSpread => {
                let long = leg(Buy, Put, atm)?;
                let short = leg(Sell, Put, atm - width)?;
                let debit = long.premium - short.premium;
                (vec![long, short], Some(width - debit), Some(debit), vec![atm - debit], 55)
            }
            StrategyKind::IronCondor => {
                let inner = step * CONDOR_SHORT_STEPS;
                let outer = step * CONDOR_LONG_STEPS;
                let short_call = leg(Sell, Call, atm + inner)?;
                let long_call = leg(Buy, Call, atm + outer)?;
                let short_put = leg(Sell, Put, atm - inner)?;
                let long_put = leg(Buy, Put, atm - outer)?;
                let credit = (short_call.premium - long_call.premium)
                    + (short_put.premium - long_put.premium);
                (
                    vec![short_call, long_call, short_put, long_put],
                    Some(credit),
                    Some((outer - inner) - credit),
                    vec![atm - inner - credit, atm + inner + credit],
                    70,
                )
            }
            StrategyKind::IronButterfly => {
                let short_call = leg(Sell, Call, atm)?;
                let short_put = leg(Sell, Put, atm)?;
                let long_call = leg(Buy, Call, atm + width)?;
                let long_put = leg(Buy, Put, atm - width)?;
                let credit = (short_call.premium + short_put.premium)
                    - (long_call.premium + long_put.premium);
                (
                    vec![short_call, short_put, long_call, long_put],
                    Some(credit),
                    Some(width - credit),
                    vec![atm - credit, atm + credit],
                    60,
                )
            }
            StrategyKind::LongStraddle => {
                let call = leg(Buy, Call, atm)?;
                let put = leg(Buy, Put, atm)?;
                let total = call.premium + put.premium;
                (vec![call, put], None, Some(total), vec![atm - total, atm + total], 40)
            }
            StrategyKind::LongStrangle => {
                let offset = step * STRANGLE_STEPS;
                let call = leg(Buy, Call, atm + offset)?;
                let put = leg(Buy, Put, atm - offset)?;
                let total = call.premium + put.premium;
                (
                    vec![call, put],
                    None,
                    Some(total),
                    vec![atm - offset - total, atm + offset + total],
                    35,
                )
            }
            StrategyKind::ShortStraddle => {
                let call = leg(Sell, Call, atm)?;
                let put = leg(Sell, Put, atm)?;
                let credit = call.premium + put.premium;
                (vec![call, put], Some(credit), None, vec![atm - credit, atm + credit], 55)
            }
            StrategyKind::BullPutSpread => {
                let short = leg(Sell, Put, atm)?;
                let long = leg(Buy, Put, atm - width)?;
                let credit = short.premium - long.premium;
                (vec![short, long], Some(credit), Some(width - credit), vec![atm - credit], 65)
            }
            StrategyKind::BearCallSpread => {
                let short = leg(Sell, Call, atm)?;
                let long = leg(Buy, Call, atm + width)?;
                let credit = short.premium - long.premium;
                (vec![short, long], Some(credit), Some(width - credit), vec![atm + credit], 65)
            }
            StrategyKind::LongCall => {
                let call = leg(Buy, Call, atm)?;
                let premium = call.premium;
                (vec![call], None, Some(premium), vec![atm + premium], 45)
            }
            StrategyKind::LongPut => {
                let put = leg(Buy, Put, atm)?;
                let premium = put.premium;
                (vec![put], Some(atm - premium), Some(premium), vec![atm - premium], 45)
            }
        };

        let lot = f64::from(self.config.lot_size);
        let net_premium: f64 = legs.iter().map(OptionLeg::cash_flow).sum();

        Ok(StrategySetup {
            strategy: kind,
            spot_price: spot,
            expiry_days: self.config.expiry_days,
            legs,
            net_premium,
            max_profit: max_profit.map(|p| p * lot),
            max_loss: max_loss.map(|l| l * lot),
            breakeven,
            probability_of_profit: pop,
        })
    }
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::new(OptionsConfig::default())
    }
}

fn steps_below_atm(kind: StrategyKind) -> f64 {
    match kind {
        StrategyKind::BearPutSpread | StrategyKind::IronButterfly | StrategyKind::BullPutSpread => {
            SPREAD_WIDTH_STEPS
        }
        StrategyKind::IronCondor => CONDOR_LONG_STEPS,
        StrategyKind::LongStrangle => STRANGLE_STEPS,
        StrategyKind::BullCallSpread
        | StrategyKind::BearCallSpread
        | StrategyKind::LongStraddle
        | StrategyKind::ShortStraddle
        | StrategyKind::LongCall
        | StrategyKind::LongPut => 0.0,
    }
}

/// Nearest multiple of `step`; halves go to the even multiple.
pub fn atm_strike(spot: f64, step: f64) -> f64 {
    (spot / step).round_ties_even() * step
}
