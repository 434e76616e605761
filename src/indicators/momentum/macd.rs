//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::bar::PriceBar;
use crate::models::indicators::MacdIndicator;

/// Calculate MACD indicator
///
/// MACD line = EMA(fast) - EMA(slow), both seeded at the first close and
/// run over the whole series. Signal = EMA(signal) of the MACD line series.
/// Histogram = line - signal. The previous histogram value is kept so the
/// scorer can classify the histogram slope.
pub fn calculate_macd(
    bars: &[PriceBar],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    let fast = fast_period as usize;
    let slow = slow_period as usize;
    let signal = signal_period as usize;
    if fast == 0 || slow == 0 || signal == 0 || bars.len() < slow + signal {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let fast_emas = math::ema_running(&closes, fast);
    let slow_emas = math::ema_running(&closes, slow);

    // MACD series starts once the slow EMA window is filled.
    let macd_series: Vec<f64> = (slow - 1..closes.len())
        .map(|i| fast_emas[i] - slow_emas[i])
        .collect();
    if macd_series.len() < signal + 1 {
        return None;
    }

    let signal_emas = math::ema_running(&macd_series, signal);

    let last = macd_series.len() - 1;
    let histogram = macd_series[last] - signal_emas[last];
    let prev_histogram = macd_series[last - 1] - signal_emas[last - 1];

    Some(MacdIndicator {
        macd: macd_series[last],
        signal: signal_emas[last],
        histogram,
        prev_histogram,
        period: Some((fast_period, slow_period, signal_period)),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(bars: &[PriceBar]) -> Option<MacdIndicator> {
    calculate_macd(bars, 12, 26, 9)
}
