//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::models::bar::PriceBar;
use crate::models::indicators::AdxIndicator;

/// Calculate ADX with +DI and -DI.
///
/// Directional movement and true range are smoothed with a running Wilder
/// average (seeded by the first `period` deltas); DX values are Wilder-
/// smoothed into ADX. Undefined when the smoothed true range is zero.
pub fn calculate_adx(bars: &[PriceBar], period: u32) -> Option<AdxIndicator> {
    let n = period as usize;
    if n == 0 || bars.len() < n + 2 {
        return None;
    }

    let deltas = bars.len() - 1;
    let mut trs = Vec::with_capacity(deltas);
    let mut plus_dms = Vec::with_capacity(deltas);
    let mut minus_dms = Vec::with_capacity(deltas);
    for i in 1..bars.len() {
        let up = bars[i].high - bars[i - 1].high;
        let down = bars[i - 1].low - bars[i].low;
        plus_dms.push(if up > down && up > 0.0 { up } else { 0.0 });
        minus_dms.push(if down > up && down > 0.0 { down } else { 0.0 });
        trs.push(math::true_range(
            bars[i].high,
            bars[i].low,
            bars[i - 1].close,
        ));
    }

    let mut smoothed_tr: f64 = trs[..n].iter().sum();
    let mut smoothed_plus: f64 = plus_dms[..n].iter().sum();
    let mut smoothed_minus: f64 = minus_dms[..n].iter().sum();

    let mut plus_di = 0.0;
    let mut minus_di = 0.0;
    let mut adx: Option<f64> = None;

    for i in n..deltas {
        smoothed_tr = smoothed_tr - smoothed_tr / n as f64 + trs[i];
        smoothed_plus = smoothed_plus - smoothed_plus / n as f64 + plus_dms[i];
        smoothed_minus = smoothed_minus - smoothed_minus / n as f64 + minus_dms[i];

        if smoothed_tr == 0.0 {
            continue;
        }
        plus_di = 100.0 * smoothed_plus / smoothed_tr;
        minus_di = 100.0 * smoothed_minus / smoothed_tr;

        let di_sum = plus_di + minus_di;
        let dx = if di_sum > 0.0 {
            100.0 * (plus_di - minus_di).abs() / di_sum
        } else {
            0.0
        };
        adx = Some(match adx {
            Some(prev) => (prev * (n as f64 - 1.0) + dx) / n as f64,
            None => dx,
        });
    }

    if smoothed_tr == 0.0 {
        return None;
    }

    adx.map(|value| AdxIndicator {
        value,
        plus_di,
        minus_di,
        period,
    })
}

/// Calculate ADX with default period (14)
pub fn calculate_adx_default(bars: &[PriceBar]) -> Option<AdxIndicator> {
    calculate_adx(bars, 14)
}
