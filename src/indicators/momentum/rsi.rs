//! RSI (Relative Strength Index) indicator

use crate::models::bar::PriceBar;
use crate::models::indicators::RsiIndicator;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss over the last `period` deltas.
/// Returns 100 when the average loss is zero.
pub fn calculate_rsi(bars: &[PriceBar], period: u32) -> Option<RsiIndicator> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let value = rsi_from_closes(&closes, period as usize)?;
    Some(RsiIndicator {
        value,
        period: Some(period),
    })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(bars: &[PriceBar]) -> Option<RsiIndicator> {
    calculate_rsi(bars, 14)
}

/// Rolling RSI at every index with enough history, oldest first.
///
/// Used by the Stochastic RSI, which applies the %K formula to this
/// series instead of price.
pub fn rsi_series(bars: &[PriceBar], period: u32) -> Vec<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let period = period as usize;
    let mut out = Vec::new();
    for end in (period + 1)..=closes.len() {
        if let Some(value) = rsi_from_closes(&closes[..end], period) {
            out.push(value);
        }
    }
    out
}

fn rsi_from_closes(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in (closes.len() - period)..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss += change.abs();
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}
