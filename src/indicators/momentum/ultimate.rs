//! Ultimate Oscillator

use crate::models::bar::PriceBar;

/// Calculate the Ultimate Oscillator over three windows, weighted 4:2:1.
///
/// BP = close - min(low, prev close)
/// TR = max(high, prev close) - min(low, prev close)
/// UO = 100 * (4*avg(a) + 2*avg(b) + avg(c)) / 7
/// where avg(w) = sum(BP, last w) / sum(TR, last w).
/// Undefined when any window's true-range sum is zero.
pub fn calculate_ultimate_oscillator(
    bars: &[PriceBar],
    short: u32,
    medium: u32,
    long: u32,
) -> Option<f64> {
    let long_n = long as usize;
    if long_n == 0 || bars.len() < long_n + 1 {
        return None;
    }

    let mut buying_pressure = Vec::with_capacity(bars.len() - 1);
    let mut true_range = Vec::with_capacity(bars.len() - 1);
    for i in 1..bars.len() {
        let prev_close = bars[i - 1].close;
        let low = bars[i].low.min(prev_close);
        let high = bars[i].high.max(prev_close);
        buying_pressure.push(bars[i].close - low);
        true_range.push(high - low);
    }

    let ratio = |period: usize| -> Option<f64> {
        let bp: f64 = buying_pressure[buying_pressure.len() - period..].iter().sum();
        let tr: f64 = true_range[true_range.len() - period..].iter().sum();
        if tr == 0.0 {
            None
        } else {
            Some(bp / tr)
        }
    };

    let a = ratio(short as usize)?;
    let b = ratio(medium as usize)?;
    let c = ratio(long_n)?;

    Some(100.0 * (4.0 * a + 2.0 * b + c) / 7.0)
}
