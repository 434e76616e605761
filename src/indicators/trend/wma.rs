//! WMA (Weighted Moving Average) indicator

use crate::common::math;
use crate::models::bar::PriceBar;

/// Calculate WMA of closes for a specific period, weights 1..n
/// oldest to newest.
pub fn calculate_wma(bars: &[PriceBar], period: u32) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::wma(&closes, period as usize)
}
