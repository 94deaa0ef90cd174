//! Expiry payoff sampling.

use crate::config::OptionsConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::options::{PayoffCurve, PayoffPoint, StrategySetup};

#[derive(Debug, Clone, Copy)]
pub struct PayoffEvaluator {
    samples: usize,
    range_pct: f64,
}

impl PayoffEvaluator {
    pub fn new(samples: usize, range_pct: f64) -> Self {
        Self { samples, range_pct }
    }

    pub fn from_config(config: &OptionsConfig) -> Self {
        Self::new(config.payoff_samples, config.payoff_range_pct)
    }

    /// Sample `setup` at `samples` evenly spaced prices from
    /// `spot * (1 - range)` to `spot * (1 + range)`, both ends included.
    pub fn evaluate(&self, setup: &StrategySetup, spot: f64) -> EngineResult<PayoffCurve> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(EngineError::InvalidInput(format!(
                "spot must be positive and finite, got {}",
                spot
            )));
        }
        if self.samples < 2 {
            return Err(EngineError::Config(format!(
                "payoff needs at least 2 samples, got {}",
                self.samples
            )));
        }

        let points = linspace(
            spot * (1.0 - self.range_pct),
            spot * (1.0 + self.range_pct),
            self.samples,
        )
        .map(|price| PayoffPoint {
            price,
            payoff: setup.payoff_at(price),
        })
        .collect();

        Ok(PayoffCurve { points })
    }
}

impl Default for PayoffEvaluator {
    fn default() -> Self {
        Self::from_config(&OptionsConfig::default())
    }
}

fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(move |i| if i + 1 == n { end } else { start + step * i as f64 })
}
