//! Momentum indicator

use crate::models::bar::PriceBar;

/// Calculate Momentum: close[t] - close[t - n].
///
/// Returns 0.0 when there is not enough history. That is a policy choice
/// inherited from the composite scorer, not an error: momentum always
/// casts a binary buy/sell vote.
pub fn calculate_momentum(bars: &[PriceBar], period: u32) -> f64 {
    let n = period as usize;
    if n == 0 || bars.len() < n + 1 {
        return 0.0;
    }
    let current = bars[bars.len() - 1].close;
    let past = bars[bars.len() - 1 - n].close;
    current - past
}

/// Calculate Momentum with default period (10)
pub fn calculate_momentum_default(bars: &[PriceBar]) -> f64 {
    calculate_momentum(bars, 10)
}
