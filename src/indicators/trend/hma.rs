//! HMA (Hull Moving Average) indicator

use crate::common::math;
use crate::models::bar::PriceBar;

/// Calculate the Hull Moving Average.
///
/// Standard construction: build the series `2*WMA(n/2) - WMA(n)` over the
/// trailing bars, then take WMA(sqrt(n)) of it. Needs enough history to
/// fill the sqrt(n) window of the difference series.
pub fn calculate_hma(bars: &[PriceBar], period: u32) -> Option<f64> {
    let n = period as usize;
    if n == 0 || bars.len() < n {
        return None;
    }
    let half = (n / 2).max(1);
    let sqrt_n = ((n as f64).sqrt().round() as usize).max(1);

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let mut diffs = Vec::with_capacity(closes.len() - n + 1);
    for end in n..=closes.len() {
        let prefix = &closes[..end];
        let wma_half = math::wma(prefix, half)?;
        let wma_full = math::wma(prefix, n)?;
        diffs.push(2.0 * wma_half - wma_full);
    }

    math::wma(&diffs, sqrt_n)
}
