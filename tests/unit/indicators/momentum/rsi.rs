//! Unit tests for RSI

use chrono::Utc;
use cryage::indicators::momentum::{calculate_rsi, calculate_rsi_default, rsi_series};
use cryage::models::bar::PriceBar;

fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .map(|&c| PriceBar::new(c, c + 0.05, c - 0.05, c, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_rsi_insufficient_data() {
    let bars = bars_from_closes(&[100.0; 14]);
    assert!(calculate_rsi(&bars, 14).is_none());
}

#[test]
fn test_rsi_flat_series_saturates_high() {
    // No losses at all: RSI pegs at 100.
    let bars = bars_from_closes(&[100.0; 30]);
    let rsi = calculate_rsi_default(&bars).unwrap();
    assert_eq!(rsi.value, 100.0);
    assert_eq!(rsi.period, Some(14));
}

#[test]
fn test_rsi_strictly_rising_is_100() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let bars = bars_from_closes(&closes);
    assert_eq!(calculate_rsi_default(&bars).unwrap().value, 100.0);
}

#[test]
fn test_rsi_strictly_falling_is_0() {
    let closes: Vec<f64> = (0..30).map(|i| 200.0 - i as f64).collect();
    let bars = bars_from_closes(&closes);
    assert_eq!(calculate_rsi_default(&bars).unwrap().value, 0.0);
}

#[test]
fn test_rsi_known_value() {
    // Deltas +1.0 then -0.5 over a 2-period window:
    // avg gain 0.5, avg loss 0.25, RS = 2, RSI = 200/3.
    let bars = bars_from_closes(&[10.0, 11.0, 10.5]);
    let rsi = calculate_rsi(&bars, 2).unwrap();
    assert!((rsi.value - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_rsi_idempotent_on_same_series() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin()).collect();
    let bars = bars_from_closes(&closes);
    let first = calculate_rsi_default(&bars).unwrap();
    let second = calculate_rsi_default(&bars).unwrap();
    assert_eq!(first.value.to_bits(), second.value.to_bits());
}

#[test]
fn test_rsi_series_length() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64 * 0.3).collect();
    let bars = bars_from_closes(&closes);
    let series = rsi_series(&bars, 14);
    assert_eq!(series.len(), 40 - 14);
    assert!(series.iter().all(|v| (0.0..=100.0).contains(v)));
}
