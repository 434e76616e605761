//! CCI (Commodity Channel Index) indicator

use crate::common::math;
use crate::models::bar::PriceBar;

/// Calculate CCI over closes
///
/// CCI = (close - SMA(n)) / (0.015 * stddev(n))
/// Undefined when the window's standard deviation is zero.
pub fn calculate_cci(bars: &[PriceBar], period: u32) -> Option<f64> {
    let period = period as usize;
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let sma = math::sma(&closes, period)?;
    let sd = math::stddev(&closes, period)?;
    if sd == 0.0 {
        return None;
    }

    let close = *closes.last()?;
    Some((close - sma) / (0.015 * sd))
}

/// Calculate CCI with default period (20)
pub fn calculate_cci_default(bars: &[PriceBar]) -> Option<f64> {
    calculate_cci(bars, 20)
}
