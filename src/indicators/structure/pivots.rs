//! Classic pivot points

use crate::models::recommendation::PivotLevels;

/// Pivot levels from a session's high, low and close.
///
/// pivot = (H + L + C) / 3, R1 = 2P - L, S1 = 2P - H,
/// R2 = P + (H - L), S2 = P - (H - L)
pub fn calculate_pivots(high: f64, low: f64, close: f64) -> PivotLevels {
    let pivot = (high + low + close) / 3.0;
    let range = high - low;
    PivotLevels {
        pivot,
        r1: 2.0 * pivot - low,
        r2: pivot + range,
        s1: 2.0 * pivot - high,
        s2: pivot - range,
    }
}
