//! Williams %R indicator

use crate::common::math;
use crate::models::bar::PriceBar;

/// Calculate Williams %R
///
/// %R = (close - highest high) / (highest high - lowest low) * 100
/// Range is [-100, 0]; returns 0 when the window range is zero.
pub fn calculate_williams_r(bars: &[PriceBar], period: u32) -> Option<f64> {
    let period = period as usize;
    if period == 0 || bars.len() < period {
        return None;
    }

    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let hh = math::highest(&highs, period)?;
    let ll = math::lowest(&lows, period)?;

    if hh == ll {
        return Some(0.0);
    }

    let close = bars.last()?.close;
    Some((close - hh) / (hh - ll) * 100.0)
}
