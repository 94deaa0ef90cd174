//! Engine configuration.
//!
//! Every component receives its slice of [`EngineConfig`] at construction.
//! Defaults reproduce the calibrated NIFTY settings; `from_env` lets a
//! deployment override the handful of values that vary per account.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Deployment environment name (`APP_ENV`), defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub indicators: IndicatorConfig,
    pub risk: RiskConfig,
    pub options: OptionsConfig,
    pub limits: SafetyLimits,
    pub session: SessionConfig,
}

/// Indicator look-back periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub sma_fast: usize,
    pub sma_slow: usize,
    pub ema_fast: usize,
    pub ema_slow: usize,
    pub macd_signal: usize,
    pub rsi_period: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    pub atr_period: usize,
    pub volume_period: usize,
    /// Below this many bars the engine returns the neutral indicator set.
    pub min_history: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_fast: 20,
            sma_slow: 50,
            ema_fast: 12,
            ema_slow: 26,
            macd_signal: 9,
            rsi_period: 14,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            atr_period: 14,
            volume_period: 20,
            min_history: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Volatility index value assumed when no reading is available.
    pub default_vix: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self { default_vix: 15.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    pub risk_free_rate: f64,
    pub lot_size: u32,
    /// Strikes are placed on multiples of this step.
    pub strike_step: f64,
    pub expiry_days: u32,
    /// Strategies must score strictly above this to be recommended.
    pub min_strategy_score: i32,
    pub max_recommendations: usize,
    /// Smallest premium the pricer will quote.
    pub price_floor: f64,
    pub payoff_samples: usize,
    /// Half-width of the payoff curve as a fraction of spot.
    pub payoff_range_pct: f64,
    pub default_vix: f64,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.07,
            lot_size: 50,
            strike_step: 50.0,
            expiry_days: 7,
            min_strategy_score: 50,
            max_recommendations: 3,
            price_floor: 0.1,
            payoff_samples: 100,
            payoff_range_pct: 0.10,
            default_vix: 15.0,
        }
    }
}

/// Pre-trade guard rails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyLimits {
    pub daily_loss_limit: f64,
    pub per_trade_limit: f64,
    pub max_lots: u32,
    pub max_open_positions: usize,
}

impl Default for SafetyLimits {
    fn default() -> Self {
        Self {
            daily_loss_limit: 10_000.0,
            per_trade_limit: 5_000.0,
            max_lots: 2,
            max_open_positions: 10,
        }
    }
}

/// Exchange session boundaries in minutes after local midnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub pre_market_minute: u32,
    pub open_minute: u32,
    pub close_minute: u32,
    /// Exchange offset from UTC (IST is +330).
    pub utc_offset_minutes: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pre_market_minute: 9 * 60,
            open_minute: 9 * 60 + 15,
            close_minute: 15 * 60 + 30,
            utc_offset_minutes: 5 * 60 + 30,
        }
    }
}

impl EngineConfig {
    /// Build the default configuration and apply `TRADEWISE_*` overrides.
    ///
    /// A `.env` file is loaded first when present.
    pub fn from_env() -> EngineResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        env_override("TRADEWISE_RISK_FREE_RATE", &mut config.options.risk_free_rate)?;
        env_override("TRADEWISE_LOT_SIZE", &mut config.options.lot_size)?;
        env_override("TRADEWISE_STRIKE_STEP", &mut config.options.strike_step)?;
        env_override("TRADEWISE_EXPIRY_DAYS", &mut config.options.expiry_days)?;
        env_override("TRADEWISE_DEFAULT_VIX", &mut config.risk.default_vix)?;
        config.options.default_vix = config.risk.default_vix;
        env_override("TRADEWISE_DAILY_LOSS_LIMIT", &mut config.limits.daily_loss_limit)?;
        env_override("TRADEWISE_PER_TRADE_LIMIT", &mut config.limits.per_trade_limit)?;
        env_override("TRADEWISE_MAX_LOTS", &mut config.limits.max_lots)?;

        debug!(environment = %get_environment(), "EngineConfig: loaded from environment");
        Ok(config)
    }
}

fn env_override<T: FromStr>(key: &str, target: &mut T) -> EngineResult<()> {
    if let Ok(raw) = env::var(key) {
        *target = raw
            .trim()
            .parse::<T>()
            .map_err(|_| EngineError::Config(format!("invalid value for {}: '{}'", key, raw)))?;
    }
    Ok(())
}
