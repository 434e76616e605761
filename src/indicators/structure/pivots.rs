//! Pivot point levels from the prior completed bar

use crate::models::bar::PriceBar;
use crate::models::indicators::{PivotKind, PivotLevels};

/// Calculate one pivot formula from the second-to-last bar.
///
/// Needs at least two bars: the last bar is the live one, the bar before
/// it is the prior completed period the levels derive from.
pub fn calculate_pivots(bars: &[PriceBar], kind: PivotKind) -> Option<PivotLevels> {
    if bars.len() < 2 {
        return None;
    }
    let prev = &bars[bars.len() - 2];
    let (open, high, low, close) = (prev.open, prev.high, prev.low, prev.close);
    let range = high - low;

    let levels = match kind {
        PivotKind::Traditional => {
            let pp = (high + low + close) / 3.0;
            PivotLevels {
                kind,
                pp,
                r1: 2.0 * pp - low,
                s1: 2.0 * pp - high,
                r2: pp + range,
                s2: pp - range,
                r3: high + 2.0 * (pp - low),
                s3: low - 2.0 * (high - pp),
            }
        }
        PivotKind::Fibonacci => {
            let pp = (high + low + close) / 3.0;
            PivotLevels {
                kind,
                pp,
                r1: pp + range * 0.382,
                s1: pp - range * 0.382,
                r2: pp + range * 0.618,
                s2: pp - range * 0.618,
                r3: pp + range,
                s3: pp - range,
            }
        }
        PivotKind::Woodie => {
            let pp = (high + low + 2.0 * open) / 4.0;
            PivotLevels {
                kind,
                pp,
                r1: 2.0 * pp - low,
                s1: 2.0 * pp - high,
                r2: pp + range,
                s2: pp - range,
                r3: high + 2.0 * (pp - low),
                s3: low - 2.0 * (high - pp),
            }
        }
        PivotKind::Camarilla => {
            let pp = (high + low + close) / 3.0;
            PivotLevels {
                kind,
                pp,
                r1: close + range * 1.1 / 12.0,
                s1: close - range * 1.1 / 12.0,
                r2: close + range * 1.1 / 6.0,
                s2: close - range * 1.1 / 6.0,
                r3: close + range * 1.1 / 4.0,
                s3: close - range * 1.1 / 4.0,
            }
        }
    };
    Some(levels)
}

/// Calculate every pivot formula that has enough data.
pub fn calculate_all_pivots(bars: &[PriceBar]) -> Vec<PivotLevels> {
    PivotKind::all()
        .iter()
        .filter_map(|&kind| calculate_pivots(bars, kind))
        .collect()
}
