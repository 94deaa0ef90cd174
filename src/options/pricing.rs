//! Black-Scholes valuation of European options.
//!
//! d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T), d2 = d1 - σ√T
//! Call = S·Φ(d1) - K·e^(-rT)·Φ(d2)
//! Put  = K·e^(-rT)·Φ(-d2) - S·Φ(-d1)

use crate::config::OptionsConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::options::OptionKind;
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Standard normal CDF: Φ(x)
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Calendar days to a year fraction.
pub fn years_from_days(days: u32) -> f64 {
    f64::from(days) / DAYS_PER_YEAR
}

#[derive(Debug, Clone, Copy)]
pub struct OptionPricer {
    risk_free_rate: f64,
    price_floor: f64,
}

impl OptionPricer {
    pub fn new(risk_free_rate: f64, price_floor: f64) -> Self {
        Self {
            risk_free_rate,
            price_floor,
        }
    }

    pub fn from_config(config: &OptionsConfig) -> Self {
        Self::new(config.risk_free_rate, config.price_floor)
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Theoretical premium, never below the configured floor.
    ///
    /// `volatility` is annualised and fractional (VIX 15 -> 0.15);
    /// `time_to_expiry` is in years.
    pub fn price(
        &self,
        kind: OptionKind,
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        volatility: f64,
    ) -> EngineResult<f64> {
        let (d1, d2) = self.d1_d2(spot, strike, time_to_expiry, volatility)?;
        let discount = (-self.risk_free_rate * time_to_expiry).exp();

        let value = match kind {
            OptionKind::Call => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
            OptionKind::Put => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
        };

        Ok(value.max(self.price_floor))
    }

    pub fn d1_d2(
        &self,
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        volatility: f64,
    ) -> EngineResult<(f64, f64)> {
        ensure_positive("spot", spot)?;
        ensure_positive("strike", strike)?;
        ensure_positive("time_to_expiry", time_to_expiry)?;
        ensure_positive("volatility", volatility)?;

        let vol_sqrt_t = volatility * time_to_expiry.sqrt();
        let d1 = ((spot / strike).ln()
            + (self.risk_free_rate + 0.5 * volatility * volatility) * time_to_expiry)
            / vol_sqrt_t;
        Ok((d1, d1 - vol_sqrt_t))
    }
}

impl Default for OptionPricer {
    fn default() -> Self {
        Self::from_config(&OptionsConfig::default())
    }
}

fn ensure_positive(name: &str, value: f64) -> EngineResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidInput(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}
