//! Bull/Bear Power (Elder Ray) composite

use crate::common::math;
use crate::models::bar::PriceBar;

const EMA_PERIOD: usize = 13;
const SMOOTH_WINDOW: usize = 30;

/// Calculate the smoothed Bull/Bear Power composite.
///
/// Per bar: (high - EMA13) + (low - EMA13), with the EMA running over the
/// series up to that bar. With at least 30 bars the per-bar values are
/// averaged over the last 30; with less history it falls back to the
/// latest single bar.
pub fn calculate_bull_bear_power(bars: &[PriceBar]) -> Option<f64> {
    if bars.len() < EMA_PERIOD {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let emas = math::ema_running(&closes, EMA_PERIOD);

    let power = |i: usize| (bars[i].high - emas[i]) + (bars[i].low - emas[i]);

    if bars.len() >= SMOOTH_WINDOW {
        let start = bars.len() - SMOOTH_WINDOW;
        let sum: f64 = (start..bars.len()).map(power).sum();
        Some(sum / SMOOTH_WINDOW as f64)
    } else {
        Some(power(bars.len() - 1))
    }
}
