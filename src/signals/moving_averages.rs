//! Moving-average family: the fixed ladder and its classification.
//!
//! Unlike the other families, entries the series is too short for are
//! dropped from the denominator as well, so the family total shrinks
//! dynamically (never above 17).

use crate::indicators::trend::{
    calculate_ema, calculate_hma, calculate_ichimoku_baseline, calculate_sma, calculate_vwma,
};
use crate::models::bar::PriceBar;
use crate::models::summary::{CategoryTally, Classification, MaEntry};

enum MaKind {
    Ema(u32),
    Sma(u32),
    Ichimoku(u32),
    Vwma(u32),
    Hma(u32),
}

/// The fixed ladder, in scoring order.
const LADDER: [(&str, MaKind); 17] = [
    ("EMA5", MaKind::Ema(5)),
    ("SMA5", MaKind::Sma(5)),
    ("EMA10", MaKind::Ema(10)),
    ("SMA10", MaKind::Sma(10)),
    ("EMA21", MaKind::Ema(21)),
    ("SMA20", MaKind::Sma(20)),
    ("EMA30", MaKind::Ema(30)),
    ("SMA30", MaKind::Sma(30)),
    ("EMA55", MaKind::Ema(55)),
    ("SMA50", MaKind::Sma(50)),
    ("EMA100", MaKind::Ema(100)),
    ("SMA100", MaKind::Sma(100)),
    ("EMA200", MaKind::Ema(200)),
    ("SMA200", MaKind::Sma(200)),
    ("Ichimoku(26)", MaKind::Ichimoku(26)),
    ("VWMA20", MaKind::Vwma(20)),
    ("HMA9", MaKind::Hma(9)),
];

/// Compute every available ladder entry with its vote against the
/// current price.
pub fn compute(bars: &[PriceBar]) -> Vec<MaEntry> {
    let price = match bars.last() {
        Some(bar) => bar.close,
        None => return Vec::new(),
    };

    LADDER
        .iter()
        .filter_map(|(name, kind)| {
            let value = match kind {
                MaKind::Ema(n) => calculate_ema(bars, *n),
                MaKind::Sma(n) => calculate_sma(bars, *n),
                MaKind::Ichimoku(n) => calculate_ichimoku_baseline(bars, *n),
                MaKind::Vwma(n) => calculate_vwma(bars, *n),
                MaKind::Hma(n) => calculate_hma(bars, *n),
            }?;
            Some(MaEntry {
                name: name.to_string(),
                value,
                signal: classify_against_price(price, value),
            })
        })
        .collect()
}

/// Price above the average is a buy, below is a sell. An exact tie is a
/// neutral vote: a perfectly flat series must not read as a sell sweep.
pub fn classify_against_price(price: f64, value: f64) -> Classification {
    if price > value {
        Classification::Buy
    } else if price < value {
        Classification::Sell
    } else {
        Classification::Neutral
    }
}

/// Tally the family over the available entries only.
pub fn tally(entries: &[MaEntry]) -> CategoryTally {
    let mut tally = CategoryTally::default();
    for entry in entries {
        tally.count(entry.signal);
    }
    tally
}
