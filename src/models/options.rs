//! Options trade structures.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionKind {
    Call,
    Put,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LegSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    BullCallSpread,
    BearPutSpread,
    IronCondor,
    IronButterfly,
    LongStraddle,
    LongStrangle,
    ShortStraddle,
    BullPutSpread,
    BearCallSpread,
    LongCall,
    LongPut,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 11] = [
        StrategyKind::BullCallSpread,
        StrategyKind::BearPutSpread,
        StrategyKind::IronCondor,
        StrategyKind::IronButterfly,
        StrategyKind::LongStraddle,
        StrategyKind::LongStrangle,
        StrategyKind::ShortStraddle,
        StrategyKind::BullPutSpread,
        StrategyKind::BearCallSpread,
        StrategyKind::LongCall,
        StrategyKind::LongPut,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionLeg {
    pub side: LegSide,
    pub kind: OptionKind,
    pub strike: f64,
    pub expiry_days: u32,
    pub lots: u32,
    pub lot_size: u32,
    /// Per-unit premium.
    pub premium: f64,
}

impl OptionLeg {
    pub fn intrinsic_at(&self, price: f64) -> f64 {
        match self.kind {
            OptionKind::Call => (price - self.strike).max(0.0),
            OptionKind::Put => (self.strike - price).max(0.0),
        }
    }

    pub fn units(&self) -> f64 {
        f64::from(self.lots) * f64::from(self.lot_size)
    }

    /// Expiry profit or loss of this leg in currency.
    pub fn payoff_at(&self, price: f64) -> f64 {
        let intrinsic = self.intrinsic_at(price);
        let per_unit = match self.side {
            LegSide::Buy => intrinsic - self.premium,
            LegSide::Sell => self.premium - intrinsic,
        };
        per_unit * self.units()
    }

    /// Premium paid (positive) or received (negative) in currency.
    pub fn cash_flow(&self) -> f64 {
        match self.side {
            LegSide::Buy => self.premium * self.units(),
            LegSide::Sell => -self.premium * self.units(),
        }
    }
}

/// A concrete, priced trade for one catalog strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySetup {
    pub strategy: StrategyKind,
    pub spot_price: f64,
    pub expiry_days: u32,
    pub legs: Vec<OptionLeg>,
    /// Net debit (positive) or credit (negative) in currency.
    pub net_premium: f64,
    /// `None` when profit is unbounded.
    pub max_profit: Option<f64>,
    /// `None` when loss is unbounded.
    pub max_loss: Option<f64>,
    pub breakeven: Vec<f64>,
    /// Heuristic probability of profit, percent.
    pub probability_of_profit: u8,
}

impl StrategySetup {
    pub fn payoff_at(&self, price: f64) -> f64 {
        self.legs.iter().map(|leg| leg.payoff_at(price)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffPoint {
    pub price: f64,
    pub payoff: f64,
}

/// Expiry payoff sampled over a price range, ascending by price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffCurve {
    pub points: Vec<PayoffPoint>,
}

impl PayoffCurve {
    pub fn max_payoff(&self) -> Option<f64> {
        self.points.iter().map(|p| p.payoff).reduce(f64::max)
    }

    pub fn min_payoff(&self) -> Option<f64> {
        self.points.iter().map(|p| p.payoff).reduce(f64::min)
    }

    pub fn first(&self) -> Option<&PayoffPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PayoffPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
