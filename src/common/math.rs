//! Series math used by the indicator calculators.
//!
//! All helpers look at the trailing end of the slice: the last element is the
//! latest completed bar.

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple moving average over the trailing `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    mean(&values[values.len() - period..])
}

/// Full exponential moving average series.
///
/// Seeded with the first value, then `EMA_t = x_t * a + EMA_{t-1} * (1 - a)`
/// with `a = 2 / (span + 1)`.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &value in values {
        let next = match prev {
            Some(p) => value * alpha + p * (1.0 - alpha),
            None => value,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Sample standard deviation (n - 1 denominator) over the trailing `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period < 2 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let avg = mean(window)?;
    let variance = window.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (period - 1) as f64;
    Some(variance.sqrt())
}

/// True range of a bar against the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Annualised volatility of log returns, in percent.
pub fn annualized_log_volatility(closes: &[f64], periods_per_year: f64) -> Option<f64> {
    let returns: Vec<f64> = closes
        .windows(2)
        .filter(|w| w[0] > 0.0 && w[1] > 0.0)
        .map(|w| (w[1] / w[0]).ln())
        .collect();
    let std = standard_deviation(&returns, returns.len())?;
    Some(std * periods_per_year.sqrt() * 100.0)
}

/// Percentage distance of `value` from `reference`; zero when the reference is zero.
pub fn pct_distance(value: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        return 0.0;
    }
    (value - reference) / reference * 100.0
}
