//! Pivot family classification.
//!
//! Four formulas, fixed denominator of 4. Each votes buy when the current
//! price has cleared its R1, sell when it has broken its S1, neutral in
//! between.

use crate::models::indicators::PivotLevels;
use crate::models::summary::{CategoryTally, Classification};

/// Fixed denominator for the pivot family.
pub const PIVOT_COUNT: u32 = 4;

pub fn classify_level(levels: &PivotLevels, price: f64) -> Classification {
    if price > levels.r1 {
        Classification::Buy
    } else if price < levels.s1 {
        Classification::Sell
    } else {
        Classification::Neutral
    }
}

/// Tally the family. A formula that could not be computed casts no vote;
/// the denominator stays 4.
pub fn tally(levels: &[PivotLevels], price: f64) -> CategoryTally {
    let mut buy = 0;
    let mut sell = 0;
    for level in levels {
        match classify_level(level, price) {
            Classification::Buy => buy += 1,
            Classification::Sell => sell += 1,
            Classification::Neutral => {}
        }
    }
    CategoryTally {
        buy,
        sell,
        neutral: PIVOT_COUNT - buy - sell,
    }
}
