//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::bar::PriceBar;

/// Calculate EMA of closes for a specific period.
///
/// Seeded with the first close and applied over the entire supplied
/// series, not just the last `period` bars.
pub fn calculate_ema(bars: &[PriceBar], period: u32) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::ema(&closes, period as usize)
}
