//! Stochastic %K indicator

use crate::common::math;
use crate::models::bar::PriceBar;

/// Calculate Stochastic %K
///
/// %K = (close - lowest low) / (highest high - lowest low) * 100
/// Returns 50 when the window range is zero.
pub fn calculate_stoch_k(bars: &[PriceBar], period: u32) -> Option<f64> {
    let period = period as usize;
    if period == 0 || bars.len() < period {
        return None;
    }

    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let hh = math::highest(&highs, period)?;
    let ll = math::lowest(&lows, period)?;

    if hh == ll {
        return Some(50.0);
    }

    let close = bars.last()?.close;
    Some((close - ll) / (hh - ll) * 100.0)
}
