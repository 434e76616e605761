//! Stochastic RSI %K indicator

use crate::common::math;
use crate::indicators::momentum::rsi::rsi_series;
use crate::models::bar::PriceBar;

/// Calculate Stochastic RSI %K: the %K formula applied to a rolling RSI
/// series instead of price.
///
/// Returns 50 when the RSI range is zero (e.g. a saturated RSI).
pub fn calculate_stoch_rsi_k(bars: &[PriceBar], rsi_period: u32, stoch_period: u32) -> Option<f64> {
    let stoch = stoch_period as usize;
    if stoch == 0 || bars.len() < (rsi_period + stoch_period) as usize {
        return None;
    }

    let rsis = rsi_series(bars, rsi_period);
    if rsis.len() < stoch {
        return None;
    }

    let hh = math::highest(&rsis, stoch)?;
    let ll = math::lowest(&rsis, stoch)?;
    if hh == ll {
        return Some(50.0);
    }

    let last = *rsis.last()?;
    Some((last - ll) / (hh - ll) * 100.0)
}
