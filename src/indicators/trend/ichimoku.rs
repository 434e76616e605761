//! Ichimoku baseline (Kijun-sen)

use crate::common::math;
use crate::models::bar::PriceBar;

/// Calculate the Ichimoku baseline:
/// (highest high(n) + lowest low(n)) / 2.
pub fn calculate_ichimoku_baseline(bars: &[PriceBar], period: u32) -> Option<f64> {
    let period = period as usize;
    if period == 0 || bars.len() < period {
        return None;
    }
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let hh = math::highest(&highs, period)?;
    let ll = math::lowest(&lows, period)?;
    Some((hh + ll) / 2.0)
}
