//! Awesome Oscillator

use crate::common::math;
use crate::models::bar::PriceBar;

const FAST: usize = 5;
const SLOW: usize = 34;

/// Calculate the Awesome Oscillator: SMA5(hl2) - SMA34(hl2).
pub fn calculate_awesome_oscillator(bars: &[PriceBar]) -> Option<f64> {
    if bars.len() < SLOW {
        return None;
    }
    let midpoints: Vec<f64> = bars.iter().map(|b| b.hl2()).collect();
    let fast = math::sma(&midpoints, FAST)?;
    let slow = math::sma(&midpoints, SLOW)?;
    Some(fast - slow)
}
