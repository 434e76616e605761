//! VWMA (Volume Weighted Moving Average) indicator

use crate::models::bar::PriceBar;

/// Calculate VWMA over the last `period` (close, volume) pairs.
///
/// Undefined when the window's total volume is zero.
pub fn calculate_vwma(bars: &[PriceBar], period: u32) -> Option<f64> {
    let period = period as usize;
    if period == 0 || bars.len() < period {
        return None;
    }

    let window = &bars[bars.len() - period..];
    let mut price_volume = 0.0;
    let mut volume = 0.0;
    for bar in window {
        price_volume += bar.close * bar.volume;
        volume += bar.volume;
    }

    if volume == 0.0 {
        return None;
    }
    Some(price_volume / volume)
}
