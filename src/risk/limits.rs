//! Pre-trade safety checks against configured limits.

use crate::config::SafetyLimits;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// What a proposed trade would add to the book.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeExposure {
    /// Worst-case loss of the proposed trade.
    pub trade_risk: f64,
    /// Realised P&L so far today.
    pub daily_pnl: f64,
    pub open_positions: usize,
    pub lots: u32,
    pub market_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyCheck {
    pub market_open: bool,
    pub daily_loss_ok: bool,
    pub per_trade_ok: bool,
    pub position_limit_ok: bool,
    pub lot_limit_ok: bool,
}

impl SafetyCheck {
    pub fn passed(&self) -> bool {
        self.market_open
            && self.daily_loss_ok
            && self.per_trade_ok
            && self.position_limit_ok
            && self.lot_limit_ok
    }
}

impl SafetyLimits {
    pub fn check(&self, exposure: &TradeExposure) -> SafetyCheck {
        let check = SafetyCheck {
            market_open: exposure.market_open,
            daily_loss_ok: exposure.daily_pnl.abs() < self.daily_loss_limit,
            per_trade_ok: exposure.trade_risk <= self.per_trade_limit,
            position_limit_ok: exposure.open_positions < self.max_open_positions,
            lot_limit_ok: exposure.lots <= self.max_lots,
        };
        if !check.passed() {
            warn!(?check, ?exposure, "SafetyLimits: trade rejected");
        }
        check
    }
}
